// src/args.rs
use clap::{ArgAction, Parser, ValueHint};
use std::path::PathBuf;

/// Directory the scraping pipeline writes its artifacts to.
pub const DEFAULT_OUTPUT_DIR: &str = "output";

#[derive(Parser, Debug)]
#[command(
    name = "verify_output",
    version,
    about = "出力ディレクトリの生成ファイル検証ツール",
    long_about = "出力ディレクトリに期待される4種類の生成ファイルが揃っているか検証します。\n\
                  各パターンで最も新しいファイルを報告し、欠落があれば終了コード1を返します。"
)]
pub struct Args {
    /// 検証対象ディレクトリ
    #[arg(long, value_hint = ValueHint::DirPath, default_value = DEFAULT_OUTPUT_DIR)]
    pub dir: PathBuf,

    /// 診断ログを詳細化 (-v: info, -vv: debug)。RUST_LOG が優先
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}
