use std::{path::PathBuf, process::ExitCode};

use multiwall::{
    compose_desktop,
    data_loaders::config::MultiWallConfig,
    display::{enable_per_monitor_dpi_awareness, enumerate_monitors},
    error, info, logging,
    paths::{default_config_path, pictures_dir},
    render_preview,
    wallpaper::{save_preview, save_wallpaper},
    warn, Assignments, ImageCache, Layout, Result,
};

pub const DEBUG_NAME: &str = "MULTIWALL";

fn config_path() -> PathBuf {
    std::env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(default_config_path)
}

fn main() -> ExitCode {
    logging::init(false, "warn");
    enable_per_monitor_dpi_awareness();

    let config_path = config_path();
    let config = MultiWallConfig::load(&config_path).unwrap_or_else(|| {
        warn!(
            "[{}] No usable config at {}; using defaults",
            DEBUG_NAME,
            config_path.display()
        );
        MultiWallConfig::default()
    });

    logging::init(config.debug, &config.log_level);
    std::panic::set_hook(Box::new(|panic_info| {
        error!("[{}] Panic: {}", DEBUG_NAME, panic_info);
    }));

    info!("!---------- [{}] Building wallpaper ----------!", DEBUG_NAME);
    info!("[{}] Config loaded from {}", DEBUG_NAME, config_path.display());

    match run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("[{}] {}", DEBUG_NAME, e);
            eprintln!("multiwall: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(config: &MultiWallConfig) -> Result<()> {
    let monitors = if config.monitors.is_empty() {
        enumerate_monitors()
    } else {
        info!("[{}] Using {} monitor(s) from config", DEBUG_NAME, config.monitors.len());
        config.monitors.clone()
    };

    let layout = Layout::new(monitors)?;
    warn!(
        "[{}][LAYOUT] {} monitor(s), bounds={:?}, offset={:?}",
        DEBUG_NAME,
        layout.monitor_count(),
        layout.bounds(),
        layout.offset()
    );

    let assignments = Assignments::restore(&config.wallpapers, layout.monitor_count());
    let mut cache = ImageCache::new(config.settings.cache.retained_images);

    let output = &config.settings.output;
    let out_dir = output.directory.clone().unwrap_or_else(pictures_dir);

    if output.write_preview {
        let preview = render_preview(&layout, &assignments, &mut cache)?;
        let path = save_preview(&preview, &out_dir, &output.preview_file_name)?;
        info!("[{}][PREVIEW] Saved {}", DEBUG_NAME, path.display());
    }

    let canvas = compose_desktop(&layout, &assignments, &mut cache)?;
    let path = save_wallpaper(&canvas, &out_dir, &output.file_name)?;

    let (style_value, tile_value) = output.style.registry_values();
    warn!(
        "[{}][OUTPUT] Saved {}x{} composite to {} (style {:?}: WallpaperStyle={}, TileWallpaper={})",
        DEBUG_NAME,
        canvas.width(),
        canvas.height(),
        path.display(),
        output.style,
        style_value,
        tile_value
    );
    println!("{}", path.display());

    Ok(())
}
