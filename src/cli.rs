use clap::{Parser, Subcommand};
use flash_report_common::{DetailsAlign, RowSpacing};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "flash-report")]
#[command(about = "安全事故フラッシュレポートのウルドゥー語ポスター生成ツール", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// レポート（画像/PDF）を翻訳してポスターを出力
    Translate {
        /// 入力ファイル（JPG/PNG/PDF）
        #[arg(required = true)]
        file: PathBuf,

        /// 出力ディレクトリ（デフォルト: 設定の output_dir → カレント）
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// 出力形式 (jpg/pdf/both/json)
        #[arg(short, long, default_value = "jpg")]
        format: ExportFormat,

        /// 情報欄の文字揃え (left/right)
        #[arg(long, default_value = "right")]
        align: DetailsAlign,

        /// 情報欄の行間 (tight/normal/loose)
        #[arg(long, default_value = "normal")]
        spacing: RowSpacing,

        /// 写真の切り抜きをしない
        #[arg(long)]
        no_crop: bool,
    },

    /// 保存済みのレコードJSONからポスターを再出力（API呼び出しなし）
    Render {
        /// レコードJSON（translate が出力した *.incident.json）
        #[arg(required = true)]
        record: PathBuf,

        /// ポスターに載せる画像（省略時はPDF扱いの代替表示）
        #[arg(short, long)]
        image: Option<PathBuf>,

        /// 出力ディレクトリ
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// 出力形式 (jpg/pdf/both)
        #[arg(short, long, default_value = "jpg")]
        format: ExportFormat,

        /// 情報欄の文字揃え (left/right)
        #[arg(long, default_value = "right")]
        align: DetailsAlign,

        /// 情報欄の行間 (tight/normal/loose)
        #[arg(long, default_value = "normal")]
        spacing: RowSpacing,
    },

    /// 設定を表示/編集
    Config {
        /// APIキーを設定
        #[arg(long)]
        set_api_key: Option<String>,

        /// 保存済みのAPIキーを削除
        #[arg(long)]
        clear_api_key: bool,

        /// Geminiモデルを設定
        #[arg(long)]
        set_model: Option<String>,

        /// ウルドゥー語フォントファイルを設定
        #[arg(long)]
        set_font: Option<PathBuf>,

        /// タイムアウト秒数を設定（0で無制限）
        #[arg(long)]
        set_timeout: Option<u64>,

        /// 設定を表示
        #[arg(long)]
        show: bool,
    },
}

#[derive(Clone, Debug, Default, PartialEq)]
pub enum ExportFormat {
    #[default]
    Jpg,
    Pdf,
    Both,
    /// レコードJSONのみ（ポスターは描画しない）
    Json,
}

impl ExportFormat {
    pub fn includes_jpeg(&self) -> bool {
        matches!(self, ExportFormat::Jpg | ExportFormat::Both)
    }

    pub fn includes_pdf(&self) -> bool {
        matches!(self, ExportFormat::Pdf | ExportFormat::Both)
    }
}

impl std::str::FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "jpg" | "jpeg" => Ok(ExportFormat::Jpg),
            "pdf" | "print" => Ok(ExportFormat::Pdf),
            "both" => Ok(ExportFormat::Both),
            "json" => Ok(ExportFormat::Json),
            _ => Err(format!("Unknown format: {}. Use jpg, pdf, both, or json", s)),
        }
    }
}
