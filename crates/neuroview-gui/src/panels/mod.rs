pub mod controls;
pub mod menu_bar;
pub mod status;
pub mod viewport;
