//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `opeach_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

fn main() {
    // Why: keep a tiny CLI probe to validate core crate wiring independently
    // from the mobile/FFI runtime setup.
    println!("opeach_core ping={}", opeach_core::ping());
    println!("opeach_core version={}", opeach_core::core_version());

    match opeach_core::sample_workspace() {
        Ok(workspace) => {
            println!("seeded opportunities={}", workspace.opportunities().len());
            for opportunity in workspace.opportunities().items() {
                println!(
                    "  {} stage={} value={:.2}",
                    opportunity.name,
                    opportunity.stage.label(),
                    opportunity.value
                );
            }
        }
        Err(err) => eprintln!("seed failed: {err}"),
    }
}
