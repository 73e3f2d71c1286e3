//! UI Components
//!
//! Reusable presentational components and dialogs.

pub mod add_to_list_dialog;
pub mod comparison_dialog;
pub mod content_card;
pub mod loading;
pub mod nav;
pub mod toast;

pub use add_to_list_dialog::AddToListDialog;
pub use comparison_dialog::ComparisonDialog;
pub use content_card::ContentCard;
pub use loading::{CardRowSkeleton, CardSkeleton, Loading};
pub use nav::SiteHeader;
pub use toast::Toast;
