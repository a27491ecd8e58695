//! CPU architecture simulator CLI.
//!
//! This binary drives the benchmark suite that compares the hardware models:
//! 1. **Pipeline:** Runs the instruction mix on the 5-stage pipelined CPU and
//!    reports cycles, stalls, CPI, and MIPS.
//! 2. **Single-cycle:** Runs the same mix on the reference CPU.
//! 3. **Cache:** Feeds a mixed sequential/strided address stream to the
//!    direct-mapped cache and reports hit and miss rates.
//! 4. **Bus:** Issues alternating read/write transactions and reports
//!    throughput and latency figures.
//!
//! Results print as aligned text sections or, with `--json`, as one JSON
//! document on stdout.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

use pipesim_core::config::{ConfigError, SimConfig};
use pipesim_core::mem::bus::{FREQUENCY_MHZ, TransactionKind, WIDTH_BYTES};
use pipesim_core::mem::cache::{BLOCK_SIZE, NUM_LINES};
use pipesim_core::sim::fill_benchmark;
use pipesim_core::stats::PerfCounters;
use pipesim_core::{Cache, MemoryBus, PipelineCpu, SingleCycleCpu};

#[derive(Parser, Debug)]
#[command(
    name = "pipesim",
    author,
    version,
    about = "Educational CPU architecture simulator",
    long_about = "Compare a 5-stage pipelined CPU against a single-cycle reference, \
                  and measure standalone cache and memory bus models.\n\n\
                  Examples:\n  pipesim bench\n  pipesim bench --instructions 1000 --trace\n  \
                  pipesim --config sim.json bench --json"
)]
struct Cli {
    /// JSON configuration file; built-in defaults are used without one.
    #[arg(long, value_name = "FILE", global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the full benchmark suite (default).
    Bench {
        /// Override the number of instructions to execute.
        #[arg(long)]
        instructions: Option<u64>,

        /// Emit the report as a JSON document on stdout.
        #[arg(long)]
        json: bool,

        /// Print a per-cycle pipeline stage diagram to stderr.
        #[arg(long)]
        trace: bool,
    },
}

fn main() {
    let cli = Cli::parse();

    let mut config = match load_config(cli.config.as_deref()) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("error: {err}");
            process::exit(1);
        }
    };

    let (json, trace) = match cli.command {
        Some(Commands::Bench {
            instructions,
            json,
            trace,
        }) => {
            if let Some(n) = instructions {
                config.program.instructions = n;
            }
            (json, trace)
        }
        None => (false, false),
    };
    config.general.trace |= trace;

    if let Err(err) = config.validate() {
        eprintln!("error: {err}");
        process::exit(1);
    }

    run_bench(&config, json);
}

fn load_config(path: Option<&std::path::Path>) -> Result<SimConfig, ConfigError> {
    match path {
        Some(path) => SimConfig::from_file(path),
        None => Ok(SimConfig::default()),
    }
}

fn run_bench(config: &SimConfig, json: bool) {
    let mut memory = vec![0_u32; config.program.memory_words];
    fill_benchmark(&mut memory, config.program.instructions);

    let pipeline = bench_pipeline(config, &mut memory, json);
    let single = bench_single_cycle(config, &mut memory, json);
    let cache = bench_cache(json);
    let bus = bench_bus(json);

    if json {
        let report = serde_json::json!({
            "pipeline": pipeline,
            "single_cycle": single,
            "cache": cache,
            "bus": bus,
        });
        println!("{report:#}");
    }
}

fn bench_pipeline(config: &SimConfig, memory: &mut [u32], quiet: bool) -> serde_json::Value {
    let mut cpu = PipelineCpu::new();
    cpu.set_trace(config.general.trace);
    cpu.execute(memory, config.program.instructions);

    let mut perf = PerfCounters::new();
    perf.add_cycles(cpu.cycle_count());
    perf.add_instructions(cpu.instruction_count());
    perf.add_stalls(cpu.stall_count());
    let report = perf.report(config.general.clock_mhz);

    if !quiet {
        println!("=== Pipelined CPU Benchmark ===");
        println!("Instructions executed: {}", cpu.instruction_count());
        println!("Total cycles:          {}", cpu.cycle_count());
        println!("Pipeline stalls:       {}", cpu.stall_count());
        println!("CPI:                   {:.3}", report.cpi);
        println!("MIPS:                  {:.2}", report.mips);
        println!();
    }

    serde_json::json!(report)
}

fn bench_single_cycle(config: &SimConfig, memory: &mut [u32], quiet: bool) -> serde_json::Value {
    let mut cpu = SingleCycleCpu::new();
    cpu.execute(memory, config.program.instructions);

    let mut perf = PerfCounters::new();
    perf.add_cycles(cpu.cycle_count());
    perf.add_instructions(cpu.instruction_count());
    let report = perf.report(config.general.clock_mhz);

    if !quiet {
        println!("=== Single-Cycle CPU Benchmark ===");
        println!("Instructions executed: {}", cpu.instruction_count());
        println!("Total cycles:          {}", cpu.cycle_count());
        println!("CPI:                   {:.3}", report.cpi);
        println!("MIPS:                  {:.2}", report.mips);
        println!();
    }

    serde_json::json!(report)
}

/// Address stream mixing sequential walks inside the cache footprint with a
/// 137-byte stride over four times the footprint.
fn bench_cache(quiet: bool) -> serde_json::Value {
    let mut cache = Cache::new();
    let footprint = (NUM_LINES * BLOCK_SIZE) as u32;

    let mut data = 0_u8;
    for i in 0_u32..10_000 {
        let addr = if i % 3 == 0 {
            (i * 4) % footprint
        } else {
            (i * 137) % (footprint * 4)
        };
        cache.access(addr, &mut data, false);
    }

    if !quiet {
        println!("=== Cache Performance Benchmark ===");
        println!("Cache accesses: {}", cache.accesses());
        println!("Cache hits:     {}", cache.hits());
        println!("Cache misses:   {}", cache.misses());
        println!("Hit rate:       {:.2}%", cache.hit_rate() * 100.0);
        println!("Miss rate:      {:.2}%", cache.miss_rate() * 100.0);
        println!();
    }

    serde_json::json!({
        "accesses": cache.accesses(),
        "hits": cache.hits(),
        "misses": cache.misses(),
        "hit_rate": cache.hit_rate(),
        "miss_rate": cache.miss_rate(),
    })
}

fn bench_bus(quiet: bool) -> serde_json::Value {
    let mut bus = MemoryBus::new();

    for i in 0_u32..1000 {
        let kind = if i % 2 == 0 {
            TransactionKind::Read
        } else {
            TransactionKind::Write
        };
        bus.request(kind, WIDTH_BYTES);
        bus.cycle();
    }

    if !quiet {
        println!("=== Memory Bus Performance ===");
        println!("Bus frequency:      {FREQUENCY_MHZ} MHz");
        println!("Bus width:          {WIDTH_BYTES} bytes");
        println!(
            "Memory latency:     {} cycles ({:.1} ns)",
            MemoryBus::memory_latency_cycles(),
            MemoryBus::memory_latency_ns()
        );
        println!("Read transactions:  {}", bus.read_transactions());
        println!("Write transactions: {}", bus.write_transactions());
        println!("Total bytes:        {}", bus.total_bytes());
        println!("Throughput:         {:.2} MB/s", bus.throughput_mbps());
        println!(
            "Utilization:        {:.2}%",
            bus.bandwidth_utilization() * 100.0
        );
        println!();
    }

    serde_json::json!({
        "frequency_mhz": FREQUENCY_MHZ,
        "width_bytes": WIDTH_BYTES,
        "latency_cycles": MemoryBus::memory_latency_cycles(),
        "latency_ns": MemoryBus::memory_latency_ns(),
        "read_transactions": bus.read_transactions(),
        "write_transactions": bus.write_transactions(),
        "total_bytes": bus.total_bytes(),
        "throughput_mbps": bus.throughput_mbps(),
        "bandwidth_utilization": bus.bandwidth_utilization(),
    })
}
