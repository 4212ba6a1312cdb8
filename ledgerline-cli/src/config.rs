use anyhow::{Context, Result};
use ledgerline_ingest::{LayoutConfig, StatementLayout};
use std::fs;
use std::path::Path;

/// Load a layout file, or the built-in Chase checking layout when none is given.
pub fn load_layout(path: Option<&Path>) -> Result<LayoutConfig> {
    let Some(p) = path else {
        return Ok(LayoutConfig::default());
    };
    let s = fs::read_to_string(p).with_context(|| format!("read {}", p.display()))?;
    toml::from_str(&s).with_context(|| format!("parse {}", p.display()))
}

pub fn compile_layout(path: Option<&Path>) -> Result<StatementLayout> {
    let cfg = load_layout(path)?;
    cfg.compile().context("compile statement layout")
}

pub fn render_layout(cfg: &LayoutConfig) -> Result<String> {
    toml::to_string_pretty(cfg).context("serialize layout")
}

pub fn init_layout(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        println!("Layout already exists: {} (pass --force to overwrite)", path.display());
        return Ok(());
    }
    let s = render_layout(&LayoutConfig::default())?;
    fs::write(path, s).with_context(|| format!("write {}", path.display()))?;
    println!("Wrote {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_layout_without_file() {
        assert_eq!(load_layout(None).unwrap(), LayoutConfig::default());
    }

    #[test]
    fn test_init_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let p = dir.path().join("layout.toml");
        init_layout(&p, false).unwrap();
        assert_eq!(load_layout(Some(&p)).unwrap(), LayoutConfig::default());
    }

    #[test]
    fn test_partial_layout_keeps_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let p = dir.path().join("layout.toml");
        fs::write(&p, "noise_prefixes = [\"Statement Period\"]\n").unwrap();

        let cfg = load_layout(Some(&p)).unwrap();
        assert_eq!(cfg.noise_prefixes, vec!["Statement Period".to_string()]);
        assert_eq!(cfg.amount_pattern, LayoutConfig::default().amount_pattern);
    }

    #[test]
    fn test_bad_pattern_fails_to_compile() {
        let dir = tempfile::tempdir().unwrap();
        let p = dir.path().join("layout.toml");
        fs::write(&p, "date_prefix_pattern = \"([\"\n").unwrap();
        let err = compile_layout(Some(&p)).unwrap_err();
        assert!(format!("{err:#}").contains("date prefix"));
    }
}
