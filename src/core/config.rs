// Copyright @yucwang 2026

use std::collections::HashMap;
use std::fmt;
use std::fs;
use std::path::{ Path, PathBuf };

use quick_xml::events::Event;
use quick_xml::Reader;

use crate::core::sample_method::SampleMethod;

pub const REFERENCE_IMAGE: &str = "default.png";
pub const TIMING_FILE: &str = "timing_results.csv";
pub const IMAGE_EXTENSION: &str = "png";

pub const SPP_REPORT_SPPS: [u32; 7] = [4, 8, 16, 32, 64, 128, 256];
pub const TIMING_REPORT_SPPS: [u32; 7] = [2, 4, 8, 16, 32, 64, 128];

#[derive(Debug)]
pub enum ConfigLoadError {
    Io(std::io::Error),
    Parse(String),
    MissingField(&'static str),
}

impl From<std::io::Error> for ConfigLoadError {
    fn from(err: std::io::Error) -> Self {
        ConfigLoadError::Io(err)
    }
}

impl fmt::Display for ConfigLoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigLoadError::Io(err) => write!(f, "io error: {}", err),
            ConfigLoadError::Parse(msg) => write!(f, "parse error: {}", msg),
            ConfigLoadError::MissingField(field) => write!(f, "missing field: {}", field),
        }
    }
}

impl std::error::Error for ConfigLoadError {}

/// Where the inputs live and which (method, spp) pairs to evaluate.
#[derive(Clone, Debug, PartialEq)]
pub struct EvalSettings {
    pub output_dir: PathBuf,
    pub reference: String,
    pub timing_file: String,
    pub image_extension: String,
    pub spps: Vec<u32>,
    pub methods: Vec<SampleMethod>,
    pub highlight: SampleMethod,
}

impl EvalSettings {
    pub fn spp_report() -> Self {
        Self::with_spps(SPP_REPORT_SPPS.to_vec())
    }

    pub fn timing_report() -> Self {
        Self::with_spps(TIMING_REPORT_SPPS.to_vec())
    }

    fn with_spps(spps: Vec<u32>) -> Self {
        Self {
            output_dir: PathBuf::from("."),
            reference: REFERENCE_IMAGE.to_string(),
            timing_file: TIMING_FILE.to_string(),
            image_extension: IMAGE_EXTENSION.to_string(),
            spps,
            methods: SampleMethod::ALL.to_vec(),
            highlight: SampleMethod::MIS,
        }
    }

    pub fn timing_path(&self) -> PathBuf {
        self.output_dir.join(&self.timing_file)
    }

    /// Overlay the settings found in an evaluation XML file. Relative
    /// output directories resolve against the file's directory.
    pub fn load_overrides<P: AsRef<Path>>(self, path: P) -> Result<Self, ConfigLoadError> {
        let path = path.as_ref();
        let xml = fs::read_to_string(path)?;
        let base_dir = path.parent().unwrap_or_else(|| Path::new("."));
        parse_settings(&xml, base_dir, self)
    }
}

/// Apply `[--config <file.xml>] [--dir <path>]` on top of `settings`. The
/// config file is applied first so `--dir` always wins.
pub fn settings_from_args<I>(settings: EvalSettings, args: I) -> Result<EvalSettings, ConfigLoadError>
where
    I: IntoIterator<Item = String>,
{
    let mut config_path: Option<PathBuf> = None;
    let mut dir: Option<PathBuf> = None;

    let mut iter = args.into_iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--config" => {
                config_path = Some(iter.next().map(PathBuf::from).ok_or(ConfigLoadError::MissingField("--config"))?);
            }
            "--dir" => {
                dir = Some(iter.next().map(PathBuf::from).ok_or(ConfigLoadError::MissingField("--dir"))?);
            }
            other => return Err(ConfigLoadError::Parse(format!("unexpected argument: {}", other))),
        }
    }

    let mut settings = match config_path {
        Some(path) => settings.load_overrides(path)?,
        None => settings,
    };
    if let Some(dir) = dir {
        settings.output_dir = dir;
    }
    Ok(settings)
}

fn parse_settings(xml: &str, base_dir: &Path, mut settings: EvalSettings) -> Result<EvalSettings, ConfigLoadError> {
    let mut reader = Reader::from_str(xml);
    reader.trim_text(true);
    let mut buf = Vec::new();

    let mut defaults: HashMap<String, String> = HashMap::new();
    let mut methods: Vec<SampleMethod> = Vec::new();
    let mut seen_root = false;

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Eof) => break,
            Ok(Event::Start(e)) | Ok(Event::Empty(e)) => {
                let mut attrs: HashMap<String, String> = HashMap::new();
                for attr in e.attributes().flatten() {
                    let key = String::from_utf8_lossy(attr.key.as_ref()).to_string();
                    let value = attr.unescape_value()
                        .map_err(|err| ConfigLoadError::Parse(err.to_string()))?
                        .to_string();
                    attrs.insert(key, value);
                }
                let get = |key: &'static str| -> Result<String, ConfigLoadError> {
                    attrs.get(key)
                        .map(|v| resolve_value(v, &defaults))
                        .ok_or(ConfigLoadError::MissingField(key))
                };

                match e.name().as_ref() {
                    b"evaluation" => seen_root = true,
                    b"default" => {
                        let name = get("name")?;
                        let value = get("value")?;
                        defaults.insert(name, value);
                    }
                    b"output" => {
                        let dir = PathBuf::from(get("dir")?);
                        settings.output_dir = if dir.is_absolute() { dir } else { base_dir.join(dir) };
                    }
                    b"reference" => settings.reference = get("filename")?,
                    b"timing" => settings.timing_file = get("filename")?,
                    b"images" => {
                        settings.image_extension = get("extension")?.trim_start_matches('.').to_ascii_lowercase();
                    }
                    b"spp" => settings.spps = parse_u32_list(&get("values")?)?,
                    b"method" => methods.push(parse_method(&get("name")?)?),
                    b"highlight" => settings.highlight = parse_method(&get("method")?)?,
                    other => {
                        return Err(ConfigLoadError::Parse(format!(
                            "unsupported element: {}", String::from_utf8_lossy(other))));
                    }
                }
            }
            Err(e) => {
                return Err(ConfigLoadError::Parse(e.to_string()));
            }
            _ => {}
        }

        buf.clear();
    }

    if !seen_root {
        return Err(ConfigLoadError::MissingField("evaluation"));
    }
    if !methods.is_empty() {
        settings.methods = methods;
    }
    if settings.spps.is_empty() {
        return Err(ConfigLoadError::MissingField("spp"));
    }

    Ok(settings)
}

fn resolve_value(raw: &str, defaults: &HashMap<String, String>) -> String {
    let mut out = raw.to_string();
    for (k, v) in defaults {
        out = out.replace(&format!("${}", k), v);
    }
    out
}

fn parse_u32(value: &str) -> Result<u32, ConfigLoadError> {
    value.parse::<u32>().map_err(|_| ConfigLoadError::Parse(format!("invalid integer: {}", value)))
}

fn parse_u32_list(value: &str) -> Result<Vec<u32>, ConfigLoadError> {
    value.split(',').map(|s| s.trim()).filter(|s| !s.is_empty()).map(parse_u32).collect()
}

fn parse_method(value: &str) -> Result<SampleMethod, ConfigLoadError> {
    value.parse::<SampleMethod>().map_err(|e| ConfigLoadError::Parse(e.to_string()))
}
