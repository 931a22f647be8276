use anyhow::Result;
use square_matrix::{ordering, Comparison, ElementRange, Operation, Side, SquareMatrix};

fn init_logging() {
    let _ = env_logger::Builder::default()
        .filter_level(log::LevelFilter::Warn)
        .parse_env(env_logger::Env::default().filter_or("SQUARE_MATRIX_LOG", "warn"))
        .try_init();
}

fn load_yaml(path: &str) -> Result<SquareMatrix> {
    let file = std::fs::File::open(path)?;
    let matrix = square_matrix::load(file)?;
    Ok(matrix)
}

fn arithmetic(a: &SquareMatrix, b: &SquareMatrix) -> Result<()> {
    println!("\nAddition, subtraction and multiplication");
    for op in [Operation::Add, Operation::Subtract, Operation::Multiply] {
        println!("\nA {op} B:");
        print!("{}", op.apply(a, b)?);
    }
    Ok(())
}

fn comparisons() -> Result<()> {
    println!("\nComparisons by element sum");
    let minor = SquareMatrix::from_flat([0, 1, 2, 3])?;
    let major = SquareMatrix::from_flat([1, 2, 3, 4])?;
    let equal = SquareMatrix::from_flat([0, 1, 2, 3])?;
    println!("\nminor:\n{minor}");
    println!("major:\n{major}");
    println!("equal:\n{equal}");

    let pairs = [
        ("major", &major, "minor", &minor),
        ("minor", &minor, "major", &major),
        ("minor", &minor, "equal", &equal),
    ];
    for code in [">", "<", "==", "!="] {
        let cmp: Comparison = code.parse()?;
        for (lname, lhs, rname, rhs) in pairs.iter() {
            println!("{lname} {cmp} {rname}: {}", cmp.evaluate(lhs, rhs));
        }
    }

    // Sides differ, so sum_cmp reports Less both ways
    let single = SquareMatrix::from_flat([6])?;
    println!(
        "single < minor: {}, minor < single: {}",
        ordering::sum_lt(&single, &minor),
        ordering::sum_lt(&minor, &single)
    );
    Ok(())
}

fn conversions(m: &SquareMatrix) -> Result<()> {
    println!("\nConversions");
    println!("\nMatrix -> grid: {:?}", m.to_grid());
    println!("\nMatrix -> text:\n{}", m.render());
    println!("Matrix -> YAML:\n{}", m.as_string()?);
    match m.fingerprint() {
        Ok(value) => println!("fingerprint: {value}"),
        Err(e) => println!("fingerprint: {e}"),
    }
    Ok(())
}

fn do_work(path: &str) -> Result<()> {
    let side = Side::try_from(3)?;
    println!("Random 3x3 matrix A:");
    let a = SquareMatrix::random(side, ElementRange::default());
    print!("{a}");
    println!("Random 3x3 matrix B:");
    let mut b = SquareMatrix::zeros(side);
    b.random_fill(side, ElementRange::default());
    print!("{b}");

    arithmetic(&a, &b)?;
    comparisons()?;
    conversions(&SquareMatrix::from_flat([0, 1, 2, 3])?)?;

    let loaded = load_yaml(path)?;
    println!("Loaded from {path}:\n{loaded}");
    conversions(&loaded)?;

    let mut rng = rand::thread_rng();
    println!(
        "placeholder determinant (random): {}",
        loaded.random_determinant(&mut rng)
    );
    println!(
        "placeholder inverse (random):\n{}",
        loaded.random_inverse(&mut rng)
    );

    Ok(())
}

fn main() {
    init_logging();
    do_work("demos/pair.yaml").unwrap();
}

#[test]
fn test_showcase() {
    do_work("demos/pair.yaml").unwrap();
}
