use anyhow::Result;

use kyotei_predict::config::Config;
use kyotei_predict::error::{AppError, ConfigError};
use kyotei_predict::models::{RaceQuery, Venue};
use kyotei_predict::utils::logging;
use kyotei_predict::workflow::{report, PredictionFlow};

#[tokio::main]
async fn main() -> Result<()> {
    // 初始化日志
    logging::init();

    // 加载配置
    let config = Config::from_env();

    // 从环境变量读取预测目标
    let query = query_from_env()?;

    let venue = Venue::find(&query.venue_name).unwrap_or(Venue::DEFAULT);
    logging::log_startup(
        &query.venue_name,
        &query.date.to_string(),
        query.race_number,
        &venue.jcd(),
        &query.race_day(),
    );

    // 构建并运行预测流程
    let result = match PredictionFlow::new(&config) {
        Ok(flow) => flow.run(&query).await,
        Err(e) => Err(e),
    };

    match result {
        Ok(prediction) => {
            logging::log_stage_result(
                &format!("{}R 最終予想（整形済み）", query.race_number),
                prediction.as_str(),
            );
            println!("{}", prediction);
            Ok(())
        }
        Err(e) => {
            eprintln!("❌ エラー: {}", report::failure_message(&query, &e));
            std::process::exit(1);
        }
    }
}

/// 从环境变量读取预测目标（LOCATION / DATE / RACE_NUM）
///
/// 未设置时的默认值：江戸川 / 今天 / 5R
fn query_from_env() -> Result<RaceQuery> {
    let location = std::env::var("LOCATION").unwrap_or_else(|_| "江戸川".to_string());
    let date_str = std::env::var("DATE")
        .unwrap_or_else(|_| chrono::Local::now().date_naive().to_string());

    let race_number: u8 = match std::env::var("RACE_NUM") {
        Ok(value) => value.parse().map_err(|_| {
            AppError::Config(ConfigError::EnvVarParseFailed {
                var_name: "RACE_NUM".to_string(),
                value,
                expected_type: "u8".to_string(),
            })
        })?,
        Err(_) => 5,
    };

    Ok(RaceQuery::parse(&location, &date_str, race_number)?)
}
