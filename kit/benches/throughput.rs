use divan::{Bencher, black_box};
use fmtkit::{Render, Template, args};

fn main() {
    divan::main();
}

// Representative log-line style templates
const SAMPLE_TEMPLATES: &[&str] = &[
    "user {0} logged in from {1}",
    "{0}: {1} ({2} retries, last error {3})",
    "literal only, no placeholders at all",
    "escaped {{braces}} around {0} and {0} again",
];

/// Generate a template with `count` placeholder/literal pairs.
fn generate_template(count: usize) -> String {
    let mut result = String::with_capacity(count * 12);
    for i in 0..count {
        result.push_str("segment ");
        result.push('{');
        result.push_str(&(i % 4).to_string());
        result.push('}');
    }
    result
}

#[divan::bench(
    name = "parse",
    args = [16, 256, 4_096, 65_536],
)]
fn bench_parse(bencher: Bencher, n: usize) {
    let template = generate_template(n);

    bencher.bench(|| Template::parse(black_box(&template)));
}

#[divan::bench(
    name = "render",
    args = [16, 256, 4_096, 65_536],
)]
fn bench_render(bencher: Bencher, n: usize) {
    let template = Template::parse(&generate_template(n)).unwrap();

    bencher.bench(|| {
        template
            .render(black_box(&args!["alpha", 42, 3.5, true]))
            .unwrap()
    });
}

#[divan::bench(name = "one_shot_small")]
fn bench_one_shot(bencher: Bencher) {
    bencher.bench(|| {
        for template in SAMPLE_TEMPLATES {
            let _ = fmtkit::format(black_box(template), &args!["a", "b", 3, 4.5]);
        }
    });
}

#[divan::bench(name = "rendered_scalar")]
fn bench_rendered_scalar(bencher: Bencher) {
    bencher.bench(|| black_box(123_456_u64).rendered());
}
