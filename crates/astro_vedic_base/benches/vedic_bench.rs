use astro_time::jd_to_centuries;
use astro_vedic_base::{
    ALL_GRAHAS, ALL_OUTER_PLANETS, ChartPoint, aspects_within_orb, karana_from_elongation,
    lagna_longitude_deg, lahiri_ayanamsha_deg, nakshatra_from_longitude, navamsa_from_longitude,
    rashi_from_longitude, tithi_from_elongation, yoga_from_sum,
};
use criterion::{Criterion, black_box, criterion_group, criterion_main};

fn ayanamsha_bench(c: &mut Criterion) {
    let t = jd_to_centuries(2_461_078.5);
    c.bench_function("lahiri_ayanamsha", |b| {
        b.iter(|| lahiri_ayanamsha_deg(black_box(t)))
    });
}

fn zodiac_bench(c: &mut Criterion) {
    let lon = 123.456;

    let mut group = c.benchmark_group("zodiac");
    group.bench_function("rashi_from_longitude", |b| {
        b.iter(|| rashi_from_longitude(black_box(lon)))
    });
    group.bench_function("nakshatra_from_longitude", |b| {
        b.iter(|| nakshatra_from_longitude(black_box(lon)))
    });
    group.bench_function("navamsa_from_longitude", |b| {
        b.iter(|| navamsa_from_longitude(black_box(lon)))
    });
    group.bench_function("lagna", |b| {
        b.iter(|| lagna_longitude_deg(black_box(211.3), 19.076, 23.436))
    });
    group.finish();
}

fn panchang_primitives_bench(c: &mut Criterion) {
    let elong = 211.75;
    let sum = 278.31;

    let mut group = c.benchmark_group("panchang_primitives");
    group.bench_function("tithi_from_elongation", |b| {
        b.iter(|| tithi_from_elongation(black_box(elong)))
    });
    group.bench_function("karana_from_elongation", |b| {
        b.iter(|| karana_from_elongation(black_box(elong)))
    });
    group.bench_function("yoga_from_sum", |b| {
        b.iter(|| yoga_from_sum(black_box(sum)))
    });
    group.finish();
}

fn aspect_bench(c: &mut Criterion) {
    let grahas = ALL_GRAHAS.map(ChartPoint::from);
    let outer = ALL_OUTER_PLANETS.map(ChartPoint::from);
    let bodies: Vec<(ChartPoint, f64)> = grahas
        .into_iter()
        .chain(outer)
        .enumerate()
        .map(|(i, p)| (p, i as f64 * 41.3))
        .collect();
    c.bench_function("aspects_twelve_bodies", |b| {
        b.iter(|| aspects_within_orb(black_box(&bodies), 3.0))
    });
}

criterion_group!(
    benches,
    ayanamsha_bench,
    zodiac_bench,
    panchang_primitives_bench,
    aspect_bench
);
criterion_main!(benches);
