pub use super::media_assets::Entity as MediaAssets;
