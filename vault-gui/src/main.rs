#![windows_subsystem = "windows"]

use std::{error::Error, io::Write};

use iced::{Settings, Size};
use tracing::error;

use vault_ui::{component::text, font, theme};

use vault_gui::{
    app::{password::hash_password, App},
    args::{parse_args, Arg},
    config::{Config, ConfigError},
    dir::VaultDirectory,
    logger::{parse_log_level, setup_logger},
    VERSION,
};

fn main() -> Result<(), Box<dyn Error>> {
    let args = parse_args(std::env::args().collect(), VERSION)?;

    let mut datadir = None;
    let mut fullscreen = false;
    let mut set_password = false;
    for arg in args {
        match arg {
            Arg::DatadirPath(path) => datadir = Some(path),
            Arg::Fullscreen => fullscreen = true,
            Arg::SetPassword => set_password = true,
        }
    }
    let datadir = match datadir {
        Some(d) => d,
        None => VaultDirectory::new_default()?,
    };
    if !datadir.exists() {
        datadir.init()?;
    }

    let config_path = datadir.config_path();
    let mut config = match Config::from_file(&config_path) {
        Ok(config) => config,
        Err(ConfigError::NotFound) => Config::default(),
        Err(e) => return Err(e.into()),
    };

    if set_password {
        return store_password(&mut config, &datadir);
    }

    config.fullscreen |= fullscreen;

    let log_level = match parse_log_level()? {
        Some(level) => level,
        None => config.log_level()?,
    };
    setup_logger(log_level, &datadir)?;
    setup_panic_hook();

    if config.password_hash.is_none() {
        tracing::warn!("No password set, run vault-gui --set-password to set one");
    }

    let settings = Settings {
        id: Some("Vault".to_string()),
        antialiasing: false,
        default_text_size: text::P1_SIZE.into(),
        default_font: font::REGULAR,
        ..Settings::default()
    };

    let window_settings = iced::window::Settings {
        size: Size {
            width: 900.0,
            height: 650.0,
        },
        min_size: Some(Size {
            width: 600.0,
            height: 500.0,
        }),
        ..Default::default()
    };

    if let Err(e) = iced::application(App::title, App::update, App::view)
        .theme(|_| theme::Theme::default())
        .subscription(App::subscription)
        .settings(settings)
        .window(window_settings)
        .run_with(move || App::new(config))
    {
        error!("{}", e);
        Err(format!("Failed to launch UI: {}", e).into())
    } else {
        Ok(())
    }
}

// Input is not masked, meant to be piped in (`echo ... | vault-gui --set-password`).
fn store_password(config: &mut Config, datadir: &VaultDirectory) -> Result<(), Box<dyn Error>> {
    eprintln!("Enter the new password (input is echoed):");
    let mut password = String::new();
    std::io::stdin().read_line(&mut password)?;
    let password = password.trim_end_matches(['\r', '\n']);
    if password.is_empty() {
        return Err("Password is required".into());
    }
    config.password_hash = Some(hash_password(password)?);
    config.to_file(&datadir.config_path())?;
    eprintln!("Password stored in {}", datadir.config_path().display());
    Ok(())
}

// A panic in any thread should stop the main thread, and print the panic.
fn setup_panic_hook() {
    std::panic::set_hook(Box::new(move |panic_info| {
        let file = panic_info
            .location()
            .map(|l| l.file())
            .unwrap_or_else(|| "'unknown'");
        let line = panic_info
            .location()
            .map(|l| l.line().to_string())
            .unwrap_or_else(|| "'unknown'".to_string());

        let bt = backtrace::Backtrace::new();
        let info = panic_info
            .payload()
            .downcast_ref::<&str>()
            .map(|s| s.to_string())
            .or_else(|| panic_info.payload().downcast_ref::<String>().cloned());
        error!(
            "panic occurred at line {} of file {}: {:?}\n{:?}",
            line, file, info, bt
        );

        let _ = std::io::stdout().flush();
        std::process::exit(1);
    }));
}
