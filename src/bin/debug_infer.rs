use tunex::source::pull_frequencies;
use tunex::tuning::{extend_table, infer_scale};
use tunex::EqualTemperament;

fn main() {
    env_logger::init();

    let mut source = EqualTemperament::default();
    let base = pull_frequencies(&mut source);

    log::info!("note 0 = {} Hz, note 127 = {} Hz", base[0], base[127]);

    let structure = infer_scale(&base);
    log::info!("inferred structure: {:?}", structure);

    let table = extend_table(&base, 256);
    log::info!("note 128 = {} Hz", table[128]);
    log::info!("note 255 = {} Hz", table[255]);
}
