pub(crate) mod table_style;
