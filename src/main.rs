use anyhow::Context;
use clap::Parser;
use proj::utils::{logger, validation::Validate};
use proj::{CliConfig, GoToolchain, ProjectCreator, ScaffoldEngine, Settings, TomlConfig};

fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // 沒有任何名稱時直接結束，不做任何處理
    if let Err(e) = cli.validate() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    let file_config = match &cli.config {
        Some(path) => TomlConfig::from_file(path)
            .with_context(|| format!("failed to load config file '{}'", path.display()))?,
        None => TomlConfig::default(),
    };

    let settings = Settings::resolve(&cli, file_config);
    settings
        .validate()
        .context("configuration validation failed")?;

    // 初始化日誌
    logger::init_cli_logger(
        settings.verbose,
        &settings.logging.level,
        settings.logging.format,
    );

    tracing::info!("🚀 Starting proj");
    tracing::debug!("settings: {:?}", settings);

    let root = std::env::current_dir().context("cannot resolve the working directory")?;

    let toolchain = GoToolchain::new(settings.toolchain.clone());
    let creator = ProjectCreator::new(toolchain, root)
        .with_explicit_module_path(settings.toolchain.explicit_module_path);
    let engine = ScaffoldEngine::new(creator);

    // 個別專案的錯誤已記錄於日誌，不影響結束碼
    engine.run(&settings.names);

    Ok(())
}
