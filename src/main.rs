use clap::Parser;
use crime_predict::{cli, client, config, error};
use crime_predict_common::{FieldId, FormState, Position};
use cli::{Cli, Commands};
use client::PredictionClient;
use config::Config;
use error::Result;

fn init_logger(verbose: bool) {
    let mut builder = pretty_env_logger::formatted_builder();
    if let Ok(filters) = std::env::var("RUST_LOG") {
        builder.parse_filters(&filters);
    } else {
        builder.filter_level(if verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Warn
        });
    }
    builder.init();
}

fn print_lookup(lookup: &crime_predict_common::AddressLookup) {
    if !lookup.valid {
        println!("✖ 住所が見つかりません: {}", lookup.address.as_deref().unwrap_or("-"));
        return;
    }
    println!("✔ {}", lookup.adresse_location.as_deref().unwrap_or("-"));
    if let (Some(lat), Some(lon)) = (lookup.latitude, lookup.longitude) {
        println!("  緯度: {}", lat);
        println!("  経度: {}", lon);
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logger(cli.verbose);
    let config = Config::load()?;

    let endpoint = config.endpoint(cli.base_url.as_deref());
    log::debug!("endpoint: {}", endpoint.base_url());

    match cli.command {
        Commands::Predict { date, district, address, longitude, latitude, json } => {
            let mut form = FormState::new();
            form.set(FieldId::Date, date);
            form.set(FieldId::District, district);
            form.set(FieldId::Address, address);
            form.set(FieldId::Longitude, longitude);
            form.set(FieldId::Latitude, latitude);

            let submission = form.begin_submit()?;
            let client = PredictionClient::new(endpoint, config.timeout_seconds)?;

            println!("🔮 送信中: {}", client.endpoint().predict_url());
            let outcome = client.predict(&submission.request).await;

            let response = match outcome {
                Ok(response) => response,
                Err(e) => {
                    println!("✖ 予測に失敗しました");
                    return Err(e);
                }
            };

            if json {
                println!("{}", serde_json::to_string_pretty(&response)?);
            } else {
                println!("\n✅ 予測: {}", response.prediction);
            }
        }

        Commands::Address { query } => {
            let client = PredictionClient::new(endpoint, config.timeout_seconds)?;
            let lookup = client.lookup_address(&query).await?;
            print_lookup(&lookup);
        }

        Commands::Reverse { latitude, longitude } => {
            let client = PredictionClient::new(endpoint, config.timeout_seconds)?;
            let lookup = client.reverse_geocode(Position { longitude, latitude }).await?;
            print_lookup(&lookup);
        }

        Commands::Accuracy => {
            let client = PredictionClient::new(endpoint, config.timeout_seconds)?;
            let accuracy = client.accuracy().await?;
            println!("モデル精度:");
            println!("  決定木:         {:.4}", accuracy.tree);
            println!("  ランダムフォレスト: {:.4}", accuracy.rf);
            println!("  KNN:            {:.4}", accuracy.knn);
            println!("  平均:           {:.4}", accuracy.global_accuracy);
        }

        Commands::Config { set_base_url, set_timeout, show } => {
            let mut config = config;
            let changed = set_base_url.is_some() || set_timeout.is_some();

            if let Some(url) = set_base_url {
                config.set_base_url(url)?;
                println!("✔ 接続先を設定しました");
            }

            if let Some(seconds) = set_timeout {
                config.set_timeout(seconds)?;
                println!("✔ タイムアウトを設定しました");
            }

            if changed {
                config.save()?;
            }

            if show || !changed {
                println!("設定:");
                println!("  接続先: {}", config.base_url);
                println!("  タイムアウト: {}秒", config.timeout_seconds);
                println!("  有効な接続先: {}", config.endpoint(cli.base_url.as_deref()).base_url());
            }
        }
    }

    Ok(())
}
