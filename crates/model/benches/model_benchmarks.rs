//! Benchmarks for the portstat-model pipeline stages.
#![allow(missing_docs)]

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use ndarray::Array2;
use portstat_model::{CorrelationEngine, PortfolioMetricsEngine, ReturnsComputer};
use portstat_primitives::{
    AlignedDateRange, Date, EndBoundary, PricePoint, PriceSeries, ReturnsTable, Ticker,
    WeightVector,
};
use rand::Rng;

fn random_walk(ticker: &str, start: Date, n_days: usize) -> PriceSeries {
    let mut rng = rand::thread_rng();
    let mut price = 100.0;
    let points = start
        .iter_days()
        .take(n_days)
        .map(|date| {
            price *= 1.0 + rng.r#gen::<f64>() * 0.04 - 0.02;
            PricePoint::new(date, price)
        })
        .collect();
    PriceSeries::new(Ticker::new(ticker), points)
}

fn random_table(n_obs: usize, n_assets: usize) -> ReturnsTable {
    let mut rng = rand::thread_rng();
    let start = Date::from_ymd_opt(2000, 1, 3).unwrap();
    let dates = start.iter_days().take(n_obs).collect();
    let tickers = (0..n_assets).map(|i| Ticker::new(format!("T{i}"))).collect();
    let values = Array2::from_shape_fn((n_obs, n_assets), |_| rng.r#gen::<f64>() * 0.04 - 0.02);
    ReturnsTable::try_new(tickers, dates, values).unwrap()
}

fn bench_returns_computer(c: &mut Criterion) {
    let mut group = c.benchmark_group("returns_computer");
    group.sample_size(30);

    let start = Date::from_ymd_opt(2000, 1, 3).unwrap();
    for (n_days, n_assets) in [(2520, 2), (2520, 10), (10_080, 10)] {
        group.throughput(Throughput::Elements((n_days * n_assets) as u64));
        group.bench_with_input(
            BenchmarkId::new("days_assets", format!("{n_days}x{n_assets}")),
            &(n_days, n_assets),
            |b, &(n_days, n_assets)| {
                let series: Vec<PriceSeries> = (0..n_assets)
                    .map(|i| random_walk(&format!("T{i}"), start, n_days))
                    .collect();
                let end = series[0].last_date().unwrap();
                let range = AlignedDateRange::new(start, end);
                let computer = ReturnsComputer::new(EndBoundary::Inclusive);

                b.iter(|| computer.compute(black_box(&series), black_box(&range)).unwrap());
            },
        );
    }

    group.finish();
}

fn bench_correlation_engine(c: &mut Criterion) {
    let mut group = c.benchmark_group("correlation_engine");

    for (n_obs, n_assets) in [(2520, 5), (2520, 25), (10_080, 50)] {
        group.throughput(Throughput::Elements((n_obs * n_assets) as u64));
        group.bench_with_input(
            BenchmarkId::new("obs_assets", format!("{n_obs}x{n_assets}")),
            &(n_obs, n_assets),
            |b, &(n_obs, n_assets)| {
                let table = random_table(n_obs, n_assets);
                let engine = CorrelationEngine::new();
                b.iter(|| engine.correlate(black_box(&table)).unwrap());
            },
        );
    }

    group.finish();
}

fn bench_portfolio_metrics(c: &mut Criterion) {
    let mut group = c.benchmark_group("portfolio_metrics");

    for n_assets in [2, 10, 50] {
        group.bench_with_input(BenchmarkId::from_parameter(n_assets), &n_assets, |b, &n| {
            let table = random_table(10_080, n);
            let weights = WeightVector::new(vec![1.0 / n as f64; n]);
            let engine = PortfolioMetricsEngine::new();
            b.iter(|| engine.metrics(black_box(&table), black_box(&weights)).unwrap());
        });
    }

    group.finish();
}

criterion_group!(benches, bench_returns_computer, bench_correlation_engine, bench_portfolio_metrics);

criterion_main!(benches);
