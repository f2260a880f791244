use chain_hash::BuildDjb2;
use chain_hash::HashTable;
use chain_hash::TableConfig;
use clap::Parser;

#[derive(Parser, Debug)]
struct Args {
    #[arg(short = 'n', long = "entries", default_value_t = 1000)]
    entries: usize,

    #[arg(short = 'c', long = "initial_capacity", default_value_t = 8)]
    initial_capacity: usize,

    #[arg(short = 'l', long = "load_factor", default_value_t = 0.7)]
    load_factor: f64,

    /// Hash keys with djb2 instead of the seeded default hasher.
    #[arg(long)]
    djb2: bool,
}

fn print_histogram(hist: &[usize]) {
    let max = hist.iter().copied().max().unwrap_or(0);
    if max == 0 {
        println!("chain histogram: empty");
        return;
    }

    let max_bar = 60usize;
    println!("chain histogram (length | buckets):");
    for (len, &count) in hist.iter().enumerate() {
        let bar = "█".repeat((count * max_bar).div_ceil(max));
        println!("{:>3} | {} ({})", len, bar, count);
    }
}

fn fill<S: core::hash::BuildHasher>(table: &mut HashTable<String, usize, S>, entries: usize) {
    let mut capacity = table.capacity();
    for i in 0..entries {
        table.insert(format!("key_{i}"), i);
        if table.capacity() != capacity {
            println!(
                "  resized {} -> {} buckets at {} entries",
                capacity,
                table.capacity(),
                table.len()
            );
            capacity = table.capacity();
        }
    }
}

fn report<S>(table: &HashTable<String, usize, S>) {
    let stats = table.stats();
    println!("Entries:            {}", stats.len);
    println!("Buckets:            {}", stats.capacity);
    println!("Occupied buckets:   {}", stats.occupied_buckets);
    println!("Longest chain:      {}", stats.longest_chain);
    println!("Load:               {:.3}", stats.load);
    println!("Mean chain length:  {:.3}", stats.mean_chain_length);
    print_histogram(&table.chain_histogram());
}

fn main() {
    let args = Args::parse();
    let config = TableConfig::default()
        .with_initial_capacity(args.initial_capacity)
        .with_load_factor(args.load_factor);

    println!(
        "Filling table (initial capacity {}, load factor {}) with {} entries...",
        args.initial_capacity, args.load_factor, args.entries
    );

    let result = if args.djb2 {
        HashTable::with_config_and_hasher(config, BuildDjb2::default()).map(|mut table| {
            fill(&mut table, args.entries);
            report(&table);
        })
    } else {
        HashTable::with_config(config).map(|mut table| {
            fill(&mut table, args.entries);
            report(&table);
        })
    };

    if let Err(err) = result {
        eprintln!("invalid configuration: {err}");
        std::process::exit(2);
    }
}
