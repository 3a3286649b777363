use kindscope_core::KindCatalog;

pub fn render(kind_enum: bool) -> kindscope_core::Result<String> {
    if kind_enum {
        KindCatalog::kind_schema()
    } else {
        KindCatalog::json_schema()
    }
}
