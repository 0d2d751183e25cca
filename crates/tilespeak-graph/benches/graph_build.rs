use criterion::{criterion_group, criterion_main, Criterion};
use tilespeak_graph::build_graph;
use tilespeak_model::{
    AacResponse, Category, DrillDownContext, EmotionLevel, EnhancedRecord, Tile, UsageData,
};

fn synthetic_records(count: usize) -> Vec<EnhancedRecord> {
    let words = ["pizza", "salad", "water", "juice", "apple", "bread", "cheese", "soup"];
    (0..count)
        .map(|i| {
            let w = |k: usize| words[(i + k) % words.len()];
            let tiles: Vec<Tile> = (0..4)
                .map(|k| Tile::new("😊", w(k), k + 1))
                .collect();
            EnhancedRecord {
                instruction: "AAC Response".to_string(),
                input: format!("You picked {}! How about {} next?", w(3), w(1)),
                aac_response: AacResponse {
                    tiles,
                    spoken_sentence: format!("I choose {}.", w(0)),
                    usage_data: UsageData {
                        category: Category::Request,
                        emotion_level: EmotionLevel::Low,
                        complexity: 4,
                        frequency_weight: 1.0,
                        learning_pattern: "standard".to_string(),
                        conversation_layer: 1,
                        drill_down_context: DrillDownContext::None,
                        content_warning: false,
                    },
                },
                raw_output: format!("😊 {}, 😊 {}, 😊 {}, 😊 {}", w(0), w(1), w(2), w(3)),
            }
        })
        .collect()
}

fn bench_graph_build(c: &mut Criterion) {
    let records = synthetic_records(1_000);
    c.bench_function("build_graph_1k_records", |b| {
        b.iter(|| build_graph(&records, 5))
    });
}

criterion_group!(benches, bench_graph_build);
criterion_main!(benches);
