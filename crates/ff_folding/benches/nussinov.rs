use criterion::Criterion;
use criterion::criterion_group;
use criterion::criterion_main;

use ff_folding::NucleotideVec;
use ff_folding::NussinovDP;
use ff_folding::TieBreak;

pub fn nussinov_folding(c: &mut Criterion) {
    let mut group = c.benchmark_group("Nussinov");
    let seq = NucleotideVec::try_from(
        "UCAGUCUUCGCUGCGCUGUAUCGAUUCGGUUUCAGUUUUUAUUGCGGCAUAUCCGAUGCGAAUUCGCAUCGGAUAUGCC"
    ).unwrap();

    group.bench_function("Fill table", |b| {
        b.iter(|| {
            let _ = NussinovDP::new(seq.clone());
        });
    });

    let dp = NussinovDP::new(seq.clone());
    group.bench_function("Traceback", |b| {
        b.iter(|| {
            let _ = dp.traceback(TieBreak::First);
        });
    });
    group.finish();
}

criterion_group!(benches, nussinov_folding);
criterion_main!(benches);
