pub(crate) mod picker_bar;
