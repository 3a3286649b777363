use kindscope_core::KindCatalog;

pub fn render(identifier: &str, json: bool) -> kindscope_core::Result<String> {
    let kind = KindCatalog::new().lookup(identifier)?;
    if json {
        return Ok(serde_json::to_string_pretty(&kind.entry())?);
    }

    Ok(format!(
        "Identifier: {}\nKind:       {}\nSubkind:    {}\nDisplay:    {}",
        kind.identifier(),
        kind.kind(),
        kind.subkind().unwrap_or("-"),
        kind
    ))
}
