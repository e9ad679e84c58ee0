//! Flash Report Common Library
//!
//! CLIとWeb(WASM)で共有される型・状態遷移・レイアウト

pub mod bbox;
pub mod error;
pub mod gemini;
pub mod parser;
pub mod pipeline;
pub mod poster;
pub mod prompts;
pub mod state;
pub mod types;

pub use bbox::{map_box_to_pixels, BoundingBox, CropRegion, PixelRect};
pub use error::{Error, Result};
pub use parser::parse_incident_response;
pub use pipeline::{crop_or_original, extract_and_crop, process_upload, process_upload_with, Cropper, PipelineOptions, Translator};
pub use poster::{DetailsAlign, PosterView, RowSpacing};
pub use state::{AppState, Session};
pub use types::{IncidentRecord, UploadAsset};
