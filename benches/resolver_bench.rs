// Benchmark for holiday resolution and a full render
// Measures the per-tick cost of the widget update step

use chrono::{NaiveDate, NaiveDateTime};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use holiday_countdown::models::holiday::HolidayCalendar;
use holiday_countdown::models::settings::WidgetSettings;
use holiday_countdown::services::holiday::HolidayResolver;
use holiday_countdown::services::render::{render, MemoryPage};

fn instant(month: u32, day: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, month, day)
        .unwrap()
        .and_hms_opt(12, 0, 0)
        .unwrap()
}

fn bench_resolve(c: &mut Criterion) {
    let calendar = HolidayCalendar::default();
    let resolver = HolidayResolver::new(&calendar);
    let mut group = c.benchmark_group("resolve");

    // Early in the list, mid-year and the wrap-around path
    for (name, now) in [
        ("january", instant(1, 2)),
        ("june", instant(6, 2)),
        ("wrap", instant(12, 30)),
    ] {
        group.bench_with_input(BenchmarkId::from_parameter(name), &now, |b, now| {
            b.iter(|| resolver.resolve(black_box(*now)));
        });
    }

    group.finish();
}

fn bench_render(c: &mut Criterion) {
    let settings = WidgetSettings::default();
    let mut page = MemoryPage::with_targets(settings.targets.all());
    let now = instant(6, 2);

    c.bench_function("render_full_widget", |b| {
        b.iter(|| render(&mut page, &settings, black_box(now)));
    });
}

criterion_group!(benches, bench_resolve, bench_render);
criterion_main!(benches);
