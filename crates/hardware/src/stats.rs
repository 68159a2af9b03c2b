//! Simulation statistics collection and reporting.
//!
//! This module tracks performance metrics for the pipeline simulator. It provides:
//! 1. **Cycle and IPC:** Total cycles, retired instructions, and derived CPI/IPC.
//! 2. **Instruction mix:** Counts by category (ALU, load, store, branch, jump).
//! 3. **Hazards:** Load-use stalls, taken-branch flushes, and forwarding events.

use std::fmt;

use crate::core::pipeline::signals::ControlSignals;

const RULE: &str = "==========================================================";
const SEPARATOR: &str = "----------------------------------------------------------";

/// Report section names accepted by [`SimStats::report_sections`].
pub const SECTIONS: [&str; 3] = ["summary", "instruction_mix", "hazards"];

/// Simulation statistics structure tracking all performance metrics.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SimStats {
    /// Total simulator cycles elapsed.
    pub cycles: u64,
    /// Number of instructions retired by the writeback stage.
    pub instructions_retired: u64,

    /// Count of register-register and register-immediate instructions retired
    /// (including `LUI` and `AUIPC`).
    pub inst_alu: u64,
    /// Count of load instructions retired.
    pub inst_load: u64,
    /// Count of store instructions retired.
    pub inst_store: u64,
    /// Count of conditional branch instructions retired.
    pub inst_branch: u64,
    /// Count of `JAL`/`JALR` instructions retired.
    pub inst_jump: u64,

    /// Cycles in which a load-use hazard stalled decode.
    pub load_use_stalls: u64,
    /// Taken branches and jumps that flushed the front end.
    pub branch_flushes: u64,
    /// Operand substitutions made from the memory stage.
    pub forwards_mem: u64,
    /// Operand substitutions made from the writeback stage.
    pub forwards_wb: u64,
}

impl SimStats {
    /// Counts a retired instruction in the instruction mix.
    ///
    /// Halts are counted as retired but belong to no mix category.
    pub const fn record_retired(&mut self, ctrl: &ControlSignals) {
        self.instructions_retired += 1;
        if ctrl.halt {
            return;
        }
        if ctrl.mem_read {
            self.inst_load += 1;
        } else if ctrl.mem_write {
            self.inst_store += 1;
        } else if ctrl.branch {
            self.inst_branch += 1;
        } else if ctrl.jump {
            self.inst_jump += 1;
        } else {
            self.inst_alu += 1;
        }
    }

    /// Formats the selected report sections.
    ///
    /// # Arguments
    ///
    /// * `sections` - Names from [`SECTIONS`]; an empty slice selects all of them.
    ///
    /// # Returns
    ///
    /// The report text, framed by rule lines.
    pub fn report_sections(&self, sections: &[String]) -> String {
        Report {
            stats: self,
            sections,
        }
        .to_string()
    }

    /// Prints the selected statistics sections to stdout.
    pub fn print_sections(&self, sections: &[String]) {
        print!("{}", self.report_sections(sections));
    }

    /// Prints all statistics sections to stdout.
    ///
    /// Equivalent to `print_sections(&[])`.
    pub fn print(&self) {
        self.print_sections(&[]);
    }
}

/// A selection of report sections, rendered through `Display`.
struct Report<'a> {
    stats: &'a SimStats,
    sections: &'a [String],
}

impl Report<'_> {
    fn wants(&self, section: &str) -> bool {
        self.sections.is_empty() || self.sections.iter().any(|s| s == section)
    }
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let st = self.stats;
        let cyc = st.cycles.max(1) as f64;
        let instr = st.instructions_retired.max(1) as f64;
        let pct = |n: u64, of: f64| (n as f64 / of) * 100.0;

        writeln!(f, "\n{RULE}")?;
        writeln!(f, "RV32I PIPELINE SIMULATION STATISTICS")?;
        writeln!(f, "{RULE}")?;

        if self.wants("summary") {
            writeln!(f, "sim_cycles               {}", st.cycles)?;
            writeln!(f, "sim_insts                {}", st.instructions_retired)?;
            writeln!(
                f,
                "sim_ipc                  {:.4}",
                st.instructions_retired as f64 / cyc
            )?;
            writeln!(f, "sim_cpi                  {:.4}", cyc / instr)?;
            writeln!(f, "{SEPARATOR}")?;
        }
        if self.wants("instruction_mix") {
            writeln!(f, "INSTRUCTION MIX")?;
            for (name, n) in [
                ("op.alu", st.inst_alu),
                ("op.load", st.inst_load),
                ("op.store", st.inst_store),
                ("op.branch", st.inst_branch),
                ("op.jump", st.inst_jump),
            ] {
                writeln!(f, "  {name:<21}{n} ({:.2}%)", pct(n, instr))?;
            }
            writeln!(f, "{SEPARATOR}")?;
        }
        if self.wants("hazards") {
            writeln!(f, "HAZARDS")?;
            writeln!(
                f,
                "  stalls.load_use      {} ({:.2}%)",
                st.load_use_stalls,
                pct(st.load_use_stalls, cyc)
            )?;
            writeln!(
                f,
                "  flushes.branch       {} ({:.2}%)",
                st.branch_flushes,
                pct(st.branch_flushes, cyc)
            )?;
            writeln!(f, "  forward.mem_to_ex    {}", st.forwards_mem)?;
            writeln!(f, "  forward.wb_to_ex     {}", st.forwards_wb)?;
        }
        writeln!(f, "{RULE}")
    }
}
