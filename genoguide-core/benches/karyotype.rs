use criterion::{black_box, criterion_group, criterion_main, Criterion};
use genoguide_core::{karyotype_layout, map_span, BaseComposition, Chromosome, MarkerParams};

fn generate_assembly(scaffolds: usize) -> Vec<Chromosome> {
    let mut chromosomes: Vec<Chromosome> = (1..=22)
        .rev()
        .map(|n| Chromosome::new(n, format!("chr{}", n), 250_000_000 - n as u64 * 8_000_000))
        .collect();

    chromosomes.push(Chromosome::new(23, "chrX", 156_040_895));
    chromosomes.push(Chromosome::new(24, "chrY", 57_227_415));
    chromosomes.push(Chromosome::new(25, "chrM", 16_569));

    for i in 0..scaffolds {
        let id = 26 + i as i64;
        chromosomes.push(Chromosome::new(id, format!("chrUn_KI{:06}v1", i), 10_000 + i as u64));
    }

    chromosomes
}

fn bench_karyotype_layout(c: &mut Criterion) {
    let primary_only = generate_assembly(0);
    let with_scaffolds = generate_assembly(450);

    c.bench_function("karyotype_primary_25", |b| {
        b.iter(|| black_box(karyotype_layout(black_box(&primary_only))))
    });

    c.bench_function("karyotype_with_450_scaffolds", |b| {
        b.iter(|| black_box(karyotype_layout(black_box(&with_scaffolds))))
    });
}

fn bench_gene_markers(c: &mut Criterion) {
    let params = MarkerParams::default();
    let spans: Vec<(u64, u64)> = (0..1_000u64).map(|i| (i * 80_000, i * 80_000 + 25_000)).collect();

    c.bench_function("gene_markers_1000", |b| {
        b.iter(|| {
            for &(start, end) in &spans {
                black_box(map_span(start, end, 83_257_441, &params).ok());
            }
        })
    });
}

fn bench_composition(c: &mut Criterion) {
    c.bench_function("composition_shares", |b| {
        b.iter(|| {
            let composition = BaseComposition::from_counts(black_box([
                ("T", 4_094u64),
                ("G", 2_169),
                ("C", 5_181),
                ("A", 5_124),
                ("N", 1),
            ]));
            black_box(composition.shares())
        })
    });
}

criterion_group!(benches, bench_karyotype_layout, bench_gene_markers, bench_composition);
criterion_main!(benches);
