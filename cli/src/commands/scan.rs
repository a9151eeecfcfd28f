use portscan_common::config::Config;
use portscan_common::network::port::PortResult;
use portscan_common::network::request::ScanRequest;
use portscan_core::scanner::{self, ScanReport};
use tracing::debug;

use crate::terminal::{print, progress};

pub async fn scan(request: &ScanRequest, cfg: &Config) {
    print::announce(request);
    progress::start(request.range.len(), cfg.quiet);

    let report: ScanReport = scanner::perform_scan(request, cfg, |result: PortResult| {
        if result.is_open {
            print::open_port(result.port);
        }
        progress::advance(result.port);
    })
    .await;

    progress::finish();
    debug!(
        "Probed {} ports in {:.2?}",
        report.probed, report.elapsed
    );

    if report.open_ports.is_empty() {
        print::no_open_ports();
    } else {
        print::summary(&report.open_ports);
    }
    print::end_of_program(cfg.quiet);
}
