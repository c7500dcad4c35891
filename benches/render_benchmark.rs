use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

use steamlist::metadata::parse_embedded_metadata;
use steamlist::output::{RenderOptions, render_servers};
use steamlist::server::{ServerRecord, sort_by_name};
use steamlist::types::DisplayMode;

fn sample_servers(count: usize) -> Vec<ServerRecord> {
    (0..count)
        .map(|i| ServerRecord {
            addr: format!("10.0.{}.{}:2302", i / 256, i % 256),
            gameport: 27016,
            name: format!("Server {:05} | PvE | Loot+", count - i),
            appid: 221_100,
            version: "1.25.158593".to_string(),
            players: (i % 60) as u32,
            max_players: 60,
            gametype: format!("battleye,no3rd,lqs{},etm4.000000,entm8.000000,{:02}:41", i % 5, i % 24),
            ..Default::default()
        })
        .collect()
}

fn bench_parse_metadata(c: &mut Criterion) {
    c.bench_function("parse_embedded_metadata", |b| {
        b.iter(|| {
            parse_embedded_metadata(black_box(
                "battleye,privHive,shard,no3rd,lqs12,etm4.000000,entm8.000000,09:41",
            ))
        })
    });
}

fn bench_render_display(c: &mut Criterion) {
    let mut servers = sample_servers(10_000);
    sort_by_name(&mut servers);
    let options = RenderOptions {
        mode: DisplayMode::Display2,
        ..Default::default()
    };

    c.bench_function("render_display2_10k", |b| {
        b.iter(|| {
            let mut out = Vec::with_capacity(1 << 20);
            render_servers(&mut out, black_box(&servers), &options).unwrap();
            out
        })
    });
}

criterion_group!(benches, bench_parse_metadata, bench_render_display);
criterion_main!(benches);
