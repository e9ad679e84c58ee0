//! flash-report-urdu
//!
//! 安全事故フラッシュレポート（画像/PDF）を Gemini で読み取ってウルドゥー語に翻訳し、
//! 二言語のA4ポスターとして出力する。

pub mod cli;
pub mod config;
pub mod cropper;
pub mod error;
pub mod export;
pub mod gemini;
pub mod intake;
pub mod logging;
pub mod render;
