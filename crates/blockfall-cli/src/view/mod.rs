pub(crate) mod screens;
pub(crate) mod widgets;
