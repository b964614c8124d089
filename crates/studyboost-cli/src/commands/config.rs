use clap::Subcommand;
use studyboost_core::Config;

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Print the resolved configuration as TOML
    Show,
    /// Print the path of the config file
    Path,
    /// Write the default configuration to disk
    Reset,
}

pub fn run(action: ConfigAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        ConfigAction::Show => {
            let config = Config::load_or_default();
            print!("{}", config.to_toml()?);
        }
        ConfigAction::Path => {
            println!("{}", Config::path()?.display());
        }
        ConfigAction::Reset => {
            let config = Config::default();
            config.save()?;
            println!("config reset to defaults");
        }
    }
    Ok(())
}
