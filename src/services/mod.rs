pub mod views;

pub use views::ViewService;
