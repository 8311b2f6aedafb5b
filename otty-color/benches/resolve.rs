use criterion::{Criterion, black_box, criterion_group, criterion_main};
use otty_color::{Rgb, TextColor, palette::EXTENDED_PALETTE_LEN};

const COLUMNS: usize = 200;

fn row() -> Vec<TextColor> {
    (0..COLUMNS)
        .map(|column| match column % 3 {
            0 => TextColor::Default,
            1 => TextColor::indexed(column as u8),
            _ => TextColor::rgb(Rgb::new(column as u8, 0x40, 0x80)),
        })
        .collect()
}

fn bench_resolve_row(c: &mut Criterion) {
    let palette: Vec<Rgb> = (0..EXTENDED_PALETTE_LEN)
        .map(|i| Rgb::new(i as u8, i as u8, i as u8))
        .collect();
    let default_color = Rgb::new(0xff, 0xff, 0xff);
    let row = row();

    c.bench_function("resolve_row_bold", |b| {
        b.iter(|| {
            for color in &row {
                black_box(color.resolve(
                    black_box(&palette),
                    default_color,
                    true,
                ));
            }
        });
    });
}

criterion_group!(text_color, bench_resolve_row);
criterion_main!(text_color);
