pub(crate) mod list_table;
