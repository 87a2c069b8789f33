use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "crime-predict")]
#[command(about = "犯罪インシデントの予測APIクライアント", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// 接続先URL（設定ファイル・環境変数より優先）
    #[arg(long, global = true)]
    pub base_url: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 事件情報を送信して予測を取得
    Predict {
        /// 事件の日時（例: 2023-10-10T10:00:00）
        #[arg(short, long)]
        date: String,

        /// 警察管区名
        #[arg(short = 'p', long)]
        district: String,

        /// 事件のおおよその住所
        #[arg(short, long)]
        address: String,

        /// 経度
        #[arg(long, allow_hyphen_values = true)]
        longitude: String,

        /// 緯度
        #[arg(long, allow_hyphen_values = true)]
        latitude: String,

        /// レスポンス全体をJSONで出力
        #[arg(long)]
        json: bool,
    },

    /// 住所から座標を検索
    Address {
        /// 住所
        #[arg(required = true)]
        query: String,
    },

    /// 座標から住所を検索
    Reverse {
        /// 緯度
        #[arg(long, allow_hyphen_values = true)]
        latitude: f64,

        /// 経度
        #[arg(long, allow_hyphen_values = true)]
        longitude: f64,
    },

    /// モデルの精度を表示
    Accuracy,

    /// 設定を表示/編集
    Config {
        /// 接続先URLを設定
        #[arg(long)]
        set_base_url: Option<String>,

        /// タイムアウト秒数を設定
        #[arg(long)]
        set_timeout: Option<u64>,

        /// 設定を表示
        #[arg(long)]
        show: bool,
    },
}
