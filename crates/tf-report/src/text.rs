//! Plain-text end-of-run report.

use std::fmt;

use tf_sim::RunOutput;

/// Renders a finished run: customer totals, performance metrics, a
/// per-teller table and queue-length spread.
///
/// ```rust,ignore
/// println!("{}", RunReport(&output));
/// ```
pub struct RunReport<'a>(pub &'a RunOutput);

impl fmt::Display for RunReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let out = self.0;
        let r = &out.result;

        writeln!(f, "=== End of simulation report: {} ===", r.policy)?;
        writeln!(f)?;
        writeln!(f, "  Customers arrived       : {}", r.customers_arrived)?;
        writeln!(f, "  Customers gone away     : {}", r.customers_balked)?;
        writeln!(f, "  Customers served        : {}", r.customers_served)?;
        writeln!(f, "  Customers still waiting : {}", r.customers_unserved)?;
        writeln!(f)?;
        writeln!(f, "  Average wait time       : {:.2} units", r.avg_wait)?;
        writeln!(f, "  Maximum wait time       : {} units", r.max_wait)?;
        writeln!(f, "  Peak queue length       : {} customers", r.peak_queue_length)?;
        writeln!(f, "  Average utilization     : {:.2}%", r.avg_utilization)?;
        writeln!(f, "  Queue efficiency        : {:.2}%", r.queue_efficiency)?;
        if r.customers_served > 0 {
            writeln!(f, "  Average service time    : {:.2} units", r.avg_service_time)?;
        }
        writeln!(f)?;

        if out.tellers.is_empty() {
            writeln!(f, "  No teller data available.")?;
        } else {
            writeln!(
                f,
                "  {:<7} {:>6} {:>6} {:>6} {:>9} {:>9} {:>8} {:>7}  {}",
                "Teller", "Served", "Busy", "Free", "Avg txn", "Avg idle", "Max idle", "Util", "At end",
            )?;
            for t in &out.tellers {
                writeln!(
                    f,
                    "  {:<7} {:>6} {:>6} {:>6} {:>9} {:>9} {:>8} {:>6.1}%  {}",
                    t.id.to_string(),
                    t.customers_served,
                    t.total_busy_time,
                    t.total_free_time,
                    fixed(t.avg_transaction_time),
                    fixed(t.avg_idle_period),
                    t.max_idle_period.map_or_else(|| "-".to_owned(), |v| v.to_string()),
                    t.utilization_percent,
                    match t.current_customer {
                        Some(c) => format!("busy with {c}"),
                        None => "free".to_owned(),
                    },
                )?;
            }
        }

        if let Some(min) = r.min_queue_length {
            writeln!(f)?;
            writeln!(
                f,
                "  Queue length (min/avg/max): {min} / {:.2} / {}",
                r.avg_queue_length, r.peak_queue_length,
            )?;
        }
        Ok(())
    }
}

fn fixed(value: Option<f64>) -> String {
    value.map_or_else(|| "-".to_owned(), |v| format!("{v:.2}"))
}
