mod audit;
mod catalog;
mod color;
mod config;
mod error;
mod gradient;
mod stylesheet;
mod theme;

use std::path::PathBuf;
use std::process;

use error::RestyleError;
use theme::Theme;

const USAGE: &str = "\
usage: restyle [OPTIONS]

  --theme FILE      load a theme document (JSON)
  --preset NAME     start from a named theme preset
  --css FILE        existing stylesheet to merge (falls back to the last one used)
  --out FILE        write the themed stylesheet here (stdout if omitted)
  --save-theme FILE write the resolved theme document back out
  --audit           print the accessibility contrast report
  --list-presets    list theme and gradient presets
  --help            show this message";

#[derive(Debug, Default)]
struct Options {
    theme_file: Option<PathBuf>,
    preset: Option<String>,
    css_input: Option<PathBuf>,
    css_output: Option<PathBuf>,
    save_theme: Option<PathBuf>,
    audit: bool,
    list_presets: bool,
    help: bool,
}

fn parse_args(args: &[String]) -> Result<Options, RestyleError> {
    let mut options = Options::default();
    let mut iter = args.iter();

    fn value(
        flag: &str,
        iter: &mut std::slice::Iter<'_, String>,
    ) -> Result<String, RestyleError> {
        iter.next()
            .cloned()
            .ok_or_else(|| RestyleError::Usage(format!("{flag} requires a value")))
    }

    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--theme" => options.theme_file = Some(PathBuf::from(value("--theme", &mut iter)?)),
            "--preset" => options.preset = Some(value("--preset", &mut iter)?),
            "--css" => options.css_input = Some(PathBuf::from(value("--css", &mut iter)?)),
            "--out" => options.css_output = Some(PathBuf::from(value("--out", &mut iter)?)),
            "--save-theme" => {
                options.save_theme = Some(PathBuf::from(value("--save-theme", &mut iter)?));
            }
            "--audit" => options.audit = true,
            "--list-presets" => options.list_presets = true,
            "--help" | "-h" => options.help = true,
            other => {
                return Err(RestyleError::Usage(format!(
                    "unrecognized argument: {other}\n\n{USAGE}"
                )));
            }
        }
    }
    Ok(options)
}

fn resolve_theme(options: &Options) -> Result<Theme, RestyleError> {
    if let Some(path) = &options.theme_file {
        let contents = std::fs::read_to_string(path)?;
        let theme = Theme::from_json(&contents)?;
        log::info!("loaded theme {:?} from {}", theme.name, path.display());
        return Ok(theme);
    }
    if let Some(name) = &options.preset {
        return catalog::theme_preset(name).ok_or_else(|| RestyleError::UnknownPreset(name.clone()));
    }
    Ok(Theme::default())
}

fn run() -> Result<(), RestyleError> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let options = parse_args(&args)?;

    if options.help {
        println!("{USAGE}");
        return Ok(());
    }

    if options.list_presets {
        println!("Theme presets:");
        for name in catalog::theme_preset_names() {
            println!("  {name}");
        }
        println!("\nGradient presets:");
        for name in catalog::gradient_preset_names() {
            println!("  {name}");
        }
        return Ok(());
    }

    let mut app_config = config::load_config().unwrap_or_else(|error| {
        log::warn!("could not load config: {error}");
        config::AppConfig::default()
    });

    let theme = resolve_theme(&options)?;

    if let Some(path) = &options.save_theme {
        std::fs::write(path, theme.to_json()?)?;
        log::info!("saved theme {:?} to {}", theme.name, path.display());
    }

    if options.audit {
        let checks = audit::audit(&theme);
        print!("{}", audit::render_report(&theme, &checks));
        return Ok(());
    }

    for failure in audit::quick_failures(&theme) {
        log::warn!(
            "contrast below minimum: {} ({:.2}:1, need {}:1)",
            failure.label,
            failure.ratio,
            failure.minimum
        );
    }

    let css_input = options
        .css_input
        .clone()
        .or_else(|| app_config.last_css_input.clone());
    let existing = match &css_input {
        Some(path) => Some(std::fs::read_to_string(path)?),
        None => None,
    };
    log::info!("gradient: {}", stylesheet::gradient_description(&theme));

    let output = stylesheet::generate(&theme, existing.as_deref());

    match &options.css_output {
        Some(path) => {
            std::fs::write(path, &output)?;
            log::info!("wrote themed stylesheet to {}", path.display());
        }
        None => print!("{output}"),
    }

    app_config.last_css_input = css_input;
    if options.css_output.is_some() {
        app_config.last_css_output = options.css_output.clone();
    }
    if options.theme_file.is_some() {
        app_config.last_theme_file = options.theme_file.clone();
    }
    if let Err(error) = config::save_config(&app_config) {
        log::warn!("could not save config: {error}");
    }

    Ok(())
}

fn main() {
    env_logger::init();

    if let Err(error) = run() {
        log::error!("{error}");
        eprintln!("restyle: {error}");
        process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| (*s).to_string()).collect()
    }

    #[test]
    fn parses_full_invocation() {
        let options = parse_args(&args(&[
            "--preset",
            "Corporate Blue",
            "--css",
            "in.css",
            "--out",
            "out.css",
            "--audit",
        ]))
        .unwrap();
        assert_eq!(options.preset.as_deref(), Some("Corporate Blue"));
        assert_eq!(options.css_input, Some(PathBuf::from("in.css")));
        assert_eq!(options.css_output, Some(PathBuf::from("out.css")));
        assert!(options.audit);
    }

    #[test]
    fn rejects_unknown_flags() {
        assert!(parse_args(&args(&["--frobnicate"])).is_err());
    }

    #[test]
    fn rejects_missing_values() {
        assert!(parse_args(&args(&["--theme"])).is_err());
    }

    #[test]
    fn resolve_theme_defaults_without_inputs() {
        let theme = resolve_theme(&Options::default()).unwrap();
        assert_eq!(theme.name, "Default Dark");
    }

    #[test]
    fn resolve_theme_rejects_unknown_preset() {
        let options = Options {
            preset: Some("Nonexistent".to_string()),
            ..Options::default()
        };
        assert!(matches!(
            resolve_theme(&options),
            Err(RestyleError::UnknownPreset(_))
        ));
    }

    #[test]
    fn resolve_theme_loads_from_file() {
        let temp = tempfile::TempDir::new().unwrap();
        let path = temp.path().join("theme.json");
        let theme = catalog::theme_preset("Forest Green").unwrap();
        std::fs::write(&path, theme.to_json().unwrap()).unwrap();

        let options = Options {
            theme_file: Some(path),
            ..Options::default()
        };
        let loaded = resolve_theme(&options).unwrap();
        assert_eq!(loaded, theme);
    }
}
