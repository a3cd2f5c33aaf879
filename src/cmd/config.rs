use anyhow::{Result, anyhow};
use serde_json::json;

use healthstore::models::config::{Config, Units};
use healthstore::models::metric::{Domain, Metric};
use healthstore::output;
use healthstore::store::Capability;

pub fn run_show(human: bool) -> Result<()> {
    let config = Config::load()?;
    if human {
        let toml_str = toml::to_string_pretty(&config)?;
        println!("{}", toml_str);
    } else {
        let out = output::success("config", json!({ "config": config }));
        println!("{}", serde_json::to_string(&out)?);
    }
    Ok(())
}

pub fn run_set(key: &str, value: &str) -> Result<()> {
    let mut config = Config::load()?;

    match key {
        "units.system" => match value {
            "metric" => config.units = Units::default(),
            "imperial" => config.units = Units::imperial(),
            _ => anyhow::bail!("units.system must be 'metric' or 'imperial'"),
        },
        "log.level" => config.log.level = value.to_string(),
        "access.granted" => {
            config.access.granted = value
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(|s| s.parse::<Capability>().map_err(|e| anyhow!(e)))
                .collect::<Result<_>>()?;
        }
        k if k.starts_with("alias.") => {
            let alias = &k["alias.".len()..];
            let known = value.parse::<Metric>().is_ok()
                || Domain::ALL.into_iter().any(|d| d.name() == value);
            if !known {
                anyhow::bail!("alias target must be a metric or domain: {}", value);
            }
            config.aliases.insert(alias.to_string(), value.to_string());
        }
        _ => anyhow::bail!("unknown config key: {}", key),
    }

    config.save()?;
    let out = output::success("config", json!({ "key": key, "value": value }));
    println!("{}", serde_json::to_string(&out)?);
    Ok(())
}
