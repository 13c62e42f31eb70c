use clap::Parser;
use et::{error, success, Either};

#[derive(clap::Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Inputs passed to `example`; positive values succeed.
    #[clap(short, long, allow_hyphen_values = true)]
    pub value: Vec<i32>,
}

fn example(val: i32) -> Either<i32, String> {
    if val > 0 {
        success(2 * val).into()
    } else {
        error(String::from("[example] error: val must be > 0")).into()
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .init();

    let args = Args::parse();
    let values = if args.value.is_empty() {
        vec![2, -1]
    } else {
        args.value
    };

    let mut results: Vec<_> = values.into_iter().map(example).collect();
    for result in &mut results {
        println!("{}", result);
        let taken = result.take();
        if taken.is_error() {
            tracing::warn!(%taken, "example rejected input");
        }
        tracing::debug!(emptied = result.is_empty(), "moved result out");
    }

    let vec: Vec<Either<i32, char>> = vec![
        success(312).into(),
        error('v').into(),
        success(420).into(),
    ];
    for (i, e) in vec.iter().enumerate() {
        tracing::info!(index = i, state = %e.state(), "element");
        println!("{}", e);
    }
}
