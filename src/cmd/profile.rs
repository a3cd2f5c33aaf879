use anyhow::Result;
use serde_json::json;

use healthstore::core::profile;
use healthstore::models::config::Config;
use healthstore::output;
use healthstore::output::human;

pub fn run_show(human_flag: bool) -> Result<()> {
    let config = Config::load()?;
    let repos = super::open_repos(&config)?;
    let p = repos.profile.get()?;

    if human_flag {
        println!("{}", human::format_profile(&p));
    } else {
        let out = output::success("profile", json!({ "profile": p }));
        println!("{}", serde_json::to_string(&out)?);
    }
    Ok(())
}

pub fn run_set(key: &str, value: &str, human_flag: bool) -> Result<()> {
    let config = Config::load()?;
    let repos = super::open_repos(&config)?;
    let p = profile::set_field(&repos.profile, key, value)?;

    if human_flag {
        println!("{}", human::format_outcome(true, &format!("{key} = {value}")));
    } else {
        let out = output::success("profile", json!({ "key": key, "value": value, "profile": p }));
        println!("{}", serde_json::to_string(&out)?);
    }
    Ok(())
}

/// Resetting an empty profile is not an error; `reset` reports false.
pub fn run_reset(human_flag: bool) -> Result<()> {
    let config = Config::load()?;
    let repos = super::open_repos(&config)?;
    let reset = repos.profile.reset();

    if human_flag {
        let what = if reset {
            "medical profile reset"
        } else {
            "no medical profile stored"
        };
        println!("{}", human::format_outcome(reset, what));
    } else {
        let out = output::success("profile", json!({ "reset": reset }));
        println!("{}", serde_json::to_string(&out)?);
    }
    Ok(())
}
