// src/cli/args.rs
use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueHint};

use super::value_enum::{CliInvalidKeyPolicy, CliOutputFormat};

/// Top-level CLI arguments parsed via clap.
#[derive(Parser, Debug)]
#[command(
    name = "stride_decode",
    version = crate::VERSION,
    about = "番号付き単語リストから隠しメッセージを復元する"
)]
pub struct Args {
    /// 入力ファイル（`-` で標準入力）。各行は `<整数> <単語>` 形式
    #[arg(value_name = "INPUT", env = "STRIDE_DECODE_INPUT", value_hint = ValueHint::FilePath)]
    pub input: PathBuf,

    /// 先頭トークンが整数でない行の扱い
    #[arg(long, value_enum, default_value = "fail", help_heading = "解析")]
    pub on_invalid_key: CliInvalidKeyPolicy,

    /// 出力フォーマット
    #[arg(long, value_enum, default_value = "text", help_heading = "出力")]
    pub format: CliOutputFormat,

    /// 結果を標準出力ではなくファイルへ書き出す
    #[arg(short, long, value_name = "PATH", value_hint = ValueHint::FilePath, help_heading = "出力")]
    pub output: Option<PathBuf>,

    /// ログを詳細にする（-v: info, -vv: debug）
    #[arg(short, long, action = ArgAction::Count, conflicts_with = "quiet", help_heading = "ログ")]
    pub verbose: u8,

    /// エラー以外のログを抑制
    #[arg(short, long, help_heading = "ログ")]
    pub quiet: bool,
}
