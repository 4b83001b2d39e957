//! RotiChecker AI Common Library
//!
//! CLIとWeb(WASM)で共有される型とユーティリティ

pub mod types;
pub mod error;
pub mod validation;
pub mod prompts;
pub mod gemini;
pub mod parser;
pub mod rating;
pub mod certificate;

pub use types::{UploadedImage, SavedResult};
pub use error::{Error, Result, describe_failure};
pub use validation::{validate_upload, validate_api_key, MAX_IMAGE_BYTES};
pub use prompts::{ROTI_PROMPT, DEFAULT_MODEL};
pub use gemini::{
    GeminiRequest, GeminiResponse, build_request, endpoint_url, extract_text,
    describe_http_failure, split_data_url, to_data_url,
};
pub use parser::{AnalysisReport, Block, BlockMode, Section};
pub use rating::{rating_indicators, star_bar, MAX_SCORE};
pub use certificate::{Certificate, format_issue_date, escape_html};
