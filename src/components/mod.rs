//! UI Components for the portfolio.

mod activity_panel;
mod admin_card;
mod delete_modal;
mod filter_bar;
mod image_picker;
mod lightbox;
mod lqip_image;
mod masonry_grid;
mod skeleton;

pub use activity_panel::ActivityPanel;
pub use admin_card::AdminCard;
pub use delete_modal::DeleteModal;
pub use filter_bar::FilterBar;
pub use image_picker::ImagePicker;
pub use lightbox::Lightbox;
pub use lqip_image::LqipImage;
pub use masonry_grid::MasonryGrid;
pub use skeleton::SkeletonGrid;
