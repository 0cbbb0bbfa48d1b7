#[cfg(test)]
mod tests {
    use super::super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert!(config.loaded_from.is_none());
        assert_eq!(config.server.bind_addr(), "127.0.0.1:4001");
        assert_eq!(config.data.association_file, PathBuf::from("data/phenotype_to_genes.txt"));
        assert_eq!(config.data.phenopacket_dir, PathBuf::from("data/phenopackets"));
        assert_eq!(config.logging.filter, "phenorank=debug,info");
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let config: Config = toml::from_str(
            r#"
            [server]
            port = 8080

            [data]
            association_file = "/srv/hpo/phenotype_to_genes.txt"
            "#,
        )
        .unwrap();
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.data.association_file, PathBuf::from("/srv/hpo/phenotype_to_genes.txt"));
        assert_eq!(config.data.phenopacket_dir, default_phenopacket_dir());
        assert_eq!(config.logging.filter, default_log_filter());
    }

    #[test]
    fn test_empty_file_is_all_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.server.port, 4001);
    }

    #[test]
    fn test_explicit_missing_file_is_error() {
        let dir = tempfile::TempDir::new().unwrap();
        let err = Config::load_from(Some(dir.path().join("nope.toml"))).unwrap_err();
        assert!(err.to_string().contains("Config file not found"));
    }

    #[test]
    fn test_explicit_file_is_read() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("phenorank.toml");
        std::fs::write(&path, "[logging]\nfilter = \"warn\"\n").unwrap();
        let config = Config::load_from(Some(path.clone())).unwrap();
        assert_eq!(config.loaded_from, Some(path));
        assert_eq!(config.logging.filter, "warn");
        assert_eq!(config.server.port, 4001);
    }

    #[test]
    fn test_malformed_file_is_error() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("phenorank.toml");
        std::fs::write(&path, "[server]\nport = \"eighty\"\n").unwrap();
        assert!(Config::from_file(&path).is_err());
    }
}
