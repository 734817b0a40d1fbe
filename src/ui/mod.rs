pub mod cursor;
pub mod menu;
pub mod modal;
pub mod preloader;
pub mod scrollbar;
pub mod sections;
