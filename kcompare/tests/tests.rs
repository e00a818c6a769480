#[cfg(test)]
mod tests {
    use std::path::Path;

    use clap::Parser;
    use float_cmp::approx_eq;
    use kcompare::batch::run_batch;
    use kcompare::compare::compare;
    use kcompare::config::CompareConfig;
    use kcompare::dataset::{DatasetSize, slice_catalog};
    use kcompare::io;
    use kcompare::io::cli::{AlgorithmChoice, Cli};
    use kcompare::io::output::CompareOutput;
    use knapsack_rs::entities::KPInstance;
    use knapsack_rs::solvers::{Algorithm, KPSolver};
    use rand::prelude::SmallRng;
    use rand::{Rng, SeedableRng};
    use test_case::test_case;

    const TEXTBOOK_PATH: &str = "../assets/textbook.json";
    const SAMPLE_PATH: &str = "../assets/retail_knapsack_sample.csv";

    fn init_logger() {
        let _ = env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Debug)
            .is_test(true)
            .try_init();
    }

    #[test]
    fn textbook_catalog() {
        init_logger();
        let catalog = io::read_catalog(Path::new(TEXTBOOK_PATH)).unwrap();
        let config = CompareConfig {
            capacity_budget: 50.0,
            batch_runs: 3,
            ..CompareConfig::default()
        };
        let output = compare(&catalog.name, &catalog.products, &config).unwrap();

        assert_eq!(output.catalog, "textbook");
        assert_eq!(output.n_items, 3);
        assert_eq!(output.capacity, 5_000);
        assert_eq!(output.runs.len(), 3);

        for run in &output.runs {
            assert_eq!(run.batch_runs, 3);
            assert!(run.min_run_time_ms <= run.mean_run_time_ms);
            assert!(run.mean_run_time_ms <= run.max_run_time_ms);
            match run.algorithm {
                Algorithm::Exhaustive | Algorithm::DynamicProgramming => {
                    assert_eq!(run.selection.total_value, 220);
                    assert_eq!(run.selection.product_ids(), vec![2, 3]);
                    assert!(approx_eq!(f64, run.selection.total_cost, 50.0, ulps = 4));
                    assert_eq!(run.optimality_gap, Some(0));
                }
                Algorithm::Greedy => {
                    assert_eq!(run.selection.total_value, 160);
                    assert_eq!(run.selection.product_ids(), vec![1, 2]);
                    assert!(approx_eq!(f64, run.selection.total_cost, 30.0, ulps = 4));
                    assert_eq!(run.optimality_gap, Some(60));
                }
            }
        }
    }

    #[test_case(DatasetSize::Tiny; "tiny")]
    #[test_case(DatasetSize::Small; "small")]
    #[test_case(DatasetSize::Medium; "medium")]
    fn sample_catalog(size: DatasetSize) {
        init_logger();
        let catalog = io::read_catalog(Path::new(SAMPLE_PATH)).unwrap();
        assert_eq!(catalog.name, "retail_knapsack_sample");
        assert_eq!(catalog.products.len(), 60);

        let config = CompareConfig {
            dataset_fraction: size.fraction(),
            ..CompareConfig::default()
        };
        let products = slice_catalog(&catalog.products, config.dataset_fraction);
        let output = compare(&catalog.name, products, &config).unwrap();
        assert_eq!(output.n_items, products.len());

        let value_of = |algorithm: Algorithm| {
            output
                .runs
                .iter()
                .find(|r| r.algorithm == algorithm)
                .map(|r| r.selection.total_value)
                .unwrap()
        };
        assert_eq!(
            value_of(Algorithm::Exhaustive),
            value_of(Algorithm::DynamicProgramming)
        );
        assert!(value_of(Algorithm::Greedy) <= value_of(Algorithm::DynamicProgramming));

        for run in &output.runs {
            assert!(run.selection.total_weight <= output.capacity);
            assert!(run.selection.total_cost <= config.capacity_budget + 1e-9);
        }
    }

    #[test]
    fn dp_only_on_full_sample() {
        let catalog = io::read_catalog(Path::new(SAMPLE_PATH)).unwrap();
        let config = CompareConfig {
            algorithms: AlgorithmChoice::Dp.algorithms(),
            ..CompareConfig::default()
        };
        let output = compare(&catalog.name, &catalog.products, &config).unwrap();

        assert_eq!(output.runs.len(), 1);
        assert_eq!(output.runs[0].algorithm, Algorithm::DynamicProgramming);
        assert_eq!(output.runs[0].optimality_gap, Some(0));
        assert!(output.runs[0].selection.total_weight <= 10_000);
    }

    #[test]
    fn greedy_only_has_no_gap() {
        let catalog = io::read_catalog(Path::new(TEXTBOOK_PATH)).unwrap();
        let config = CompareConfig {
            algorithms: vec![Algorithm::Greedy],
            ..CompareConfig::default()
        };
        let output = compare(&catalog.name, &catalog.products, &config).unwrap();
        assert_eq!(output.runs[0].optimality_gap, None);
        // the default budget of $100 fits all three products
        assert_eq!(output.runs[0].selection.total_value, 280);
    }

    #[test]
    fn dp_table_limit_is_reported() {
        let catalog = io::read_catalog(Path::new(SAMPLE_PATH)).unwrap();
        let config = CompareConfig {
            algorithms: vec![Algorithm::DynamicProgramming],
            dp_max_table_cells: 100,
            ..CompareConfig::default()
        };
        let err = compare(&catalog.name, &catalog.products, &config).unwrap_err();
        assert!(format!("{err:#}").contains("table"));
    }

    #[test]
    fn negative_utility_is_rejected() {
        let data = "id,price,utility\n1,2.50,3\n2,1.00,-4\n";
        let catalog = io::csv::read_catalog_csv("neg", data.as_bytes()).unwrap();
        let err = compare(&catalog.name, &catalog.products, &CompareConfig::default()).unwrap_err();
        assert!(format!("{err:#}").contains("negative value"));
    }

    #[test]
    fn batch_runs_are_independent_and_timed() {
        let mut rng = SmallRng::seed_from_u64(0);
        let n = 12;
        let values = (0..n).map(|_| rng.random_range(1..100)).collect::<Vec<u64>>();
        let weights = (0..n).map(|_| rng.random_range(1..50)).collect::<Vec<u64>>();
        let instance = KPInstance::new(values, weights, 120).unwrap();

        for algorithm in Algorithm::ALL {
            let report = run_batch(&KPSolver::from(algorithm), &instance, 5).unwrap();
            assert_eq!(report.n_runs(), 5);
            assert_eq!(report.algorithm, algorithm);
            assert!(report.min() <= report.mean() && report.mean() <= report.max());
        }
        assert!(run_batch(&KPSolver::from(Algorithm::Greedy), &instance, 0).is_err());
    }

    #[test]
    fn partial_config_uses_defaults() {
        let config: CompareConfig =
            serde_json::from_str(r#"{"algorithms": ["greedy"], "batch_runs": 4}"#).unwrap();
        assert_eq!(config.algorithms, vec![Algorithm::Greedy]);
        assert_eq!(config.batch_runs, 4);
        assert_eq!(config.dataset_fraction, 1.0);
        assert_eq!(config.price_scale, 100);
        assert!(config.validate().is_ok());
    }

    #[test_case(CompareConfig { batch_runs: 0, ..CompareConfig::default() }; "zero runs")]
    #[test_case(CompareConfig { dataset_fraction: 0.0, ..CompareConfig::default() }; "empty fraction")]
    #[test_case(CompareConfig { dataset_fraction: 1.5, ..CompareConfig::default() }; "fraction too large")]
    #[test_case(CompareConfig { capacity_budget: -1.0, ..CompareConfig::default() }; "negative budget")]
    #[test_case(CompareConfig { capacity_budget: f64::NAN, ..CompareConfig::default() }; "nan budget")]
    #[test_case(CompareConfig { price_scale: 0, ..CompareConfig::default() }; "zero scale")]
    #[test_case(CompareConfig { algorithms: vec![], ..CompareConfig::default() }; "no algorithms")]
    fn invalid_configs_are_rejected(config: CompareConfig) {
        assert!(config.validate().is_err());
    }

    #[test]
    fn cli_overrides_config() {
        let cli = Cli::try_parse_from([
            "kcompare",
            "--input-file",
            "catalog.csv",
            "--algorithm",
            "exact",
            "--dataset-size",
            "small",
            "--batch-runs",
            "10",
            "--capacity",
            "25.5",
        ])
        .unwrap();

        let mut config = CompareConfig::default();
        cli.apply_overrides(&mut config);
        assert_eq!(
            config.algorithms,
            vec![Algorithm::Exhaustive, Algorithm::DynamicProgramming]
        );
        assert_eq!(config.dataset_fraction, DatasetSize::Small.fraction());
        assert_eq!(config.batch_runs, 10);
        assert_eq!(config.capacity_budget, 25.5);
        assert_eq!(cli.log_level, log::LevelFilter::Info);

        let conflicting = Cli::try_parse_from([
            "kcompare",
            "-i",
            "catalog.csv",
            "--dataset-size",
            "tiny",
            "--dataset-fraction",
            "0.3",
        ]);
        assert!(conflicting.is_err());
    }

    #[test]
    fn output_is_written_as_json() {
        let catalog = io::read_catalog(Path::new(TEXTBOOK_PATH)).unwrap();
        let output = compare(&catalog.name, &catalog.products, &CompareConfig::default()).unwrap();

        let path = std::env::temp_dir().join("kcompare_sol_textbook.json");
        io::write_json(&output, &path).unwrap();
        let json = std::fs::read_to_string(&path).unwrap();
        assert!(json.contains("\"Catalog\": \"textbook\""));
        assert!(json.contains("\"MeanRunTimeMs\""));

        let parsed: CompareOutput = io::read_json(&path).unwrap();
        assert_eq!(parsed.runs.len(), output.runs.len());
        assert_eq!(parsed.config, output.config);
        std::fs::remove_file(path).unwrap();
    }

    #[test]
    fn unsupported_catalog_format() {
        assert!(io::read_catalog(Path::new("../assets/catalog.xml")).is_err());
    }
}
