//! Report assembly
//!
//! Walks the probe in a fixed order and turns each reading into a labelled
//! [`Section`]. A source that fails never stops the walk: informational
//! sections show a placeholder, hardware-specific ones are left out.
//!
//! Order: host, distribution, timestamp, uptime | throttle warnings, CPU,
//! memory, swap, disks | Wi-Fi, Ethernet, ping | journal | package updates.
//! `|` marks a blank separator line.

use crate::probe::SystemProbe;
use nanosys_common::{
    format_duration, gigabytes, percent_token, AnsiTheme, CpuReading, EthernetLink, HostIdentity,
    HtmlTheme, NetworkLinkState, PackageUpdateList, PingResult, Section, SourceError,
    StorageReading, Theme, ThrottleState, Token,
};
use tracing::{debug, warn};

/// Body shown when an informational source has nothing for us.
pub const NO_DATA: &str = "No data available.";

/// Rendered in place of the average round trip when no echo came back.
pub const NO_RTT: &str = "∞";

/// Which of the optional parts of the report to include.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportOptions {
    pub distribution: bool,
    pub throttle_warnings: bool,
    pub swap: bool,
    /// Every real mount instead of just `/`
    pub all_mounts: bool,
    pub journal: bool,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            distribution: true,
            throttle_warnings: true,
            swap: true,
            all_mounts: true,
            journal: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    Section(Section),
    Separator,
}

/// An assembled report, ready to render with the theme it was built for.
pub struct Report<'t> {
    theme: &'t dyn Theme,
    blocks: Vec<Block>,
    host: Option<HostIdentity>,
}

impl<'t> Report<'t> {
    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    pub fn sections(&self) -> impl Iterator<Item = &Section> {
        self.blocks.iter().filter_map(|block| match block {
            Block::Section(section) => Some(section),
            Block::Separator => None,
        })
    }

    pub fn labels(&self) -> Vec<&str> {
        self.sections().map(|s| s.label.as_str()).collect()
    }

    pub fn section(&self, label: &str) -> Option<&Section> {
        self.sections().find(|s| s.label == label)
    }

    /// Host name as read for the identity line, if that read worked.
    pub fn hostname(&self) -> Option<&str> {
        self.host.as_ref().map(|h| h.hostname.as_str())
    }

    pub fn render(&self) -> String {
        self.blocks
            .iter()
            .map(|block| match block {
                Block::Section(section) => section.render(self.theme),
                Block::Separator => "\n".to_string(),
            })
            .collect()
    }
}

/// Builds one [`Report`] from a probe and a theme.
pub struct ReportAssembler<'a> {
    probe: &'a dyn SystemProbe,
    theme: &'a dyn Theme,
    options: ReportOptions,
}

impl<'a> ReportAssembler<'a> {
    pub fn new(probe: &'a dyn SystemProbe, theme: &'a dyn Theme) -> Self {
        Self {
            probe,
            theme,
            options: ReportOptions::default(),
        }
    }

    pub fn with_options(mut self, options: ReportOptions) -> Self {
        self.options = options;
        self
    }

    pub fn assemble(&self) -> Report<'a> {
        let mut blocks = Vec::new();
        let host = self.identity_group(&mut blocks);
        blocks.push(Block::Separator);
        self.hardware_group(&mut blocks);
        blocks.push(Block::Separator);
        self.network_group(&mut blocks);
        blocks.push(Block::Separator);
        if self.options.journal {
            push(&mut blocks, self.journal_section());
            blocks.push(Block::Separator);
        }
        push(&mut blocks, self.updates_section());

        Report {
            theme: self.theme,
            blocks,
            host,
        }
    }

    fn identity_group(&self, blocks: &mut Vec<Block>) -> Option<HostIdentity> {
        let host = self.probe.host();
        let host_section = self.informational("Hostinfo", &host, |h| self.render_host(h));
        push(blocks, host_section);

        if self.options.distribution {
            let distro = self.probe.distribution();
            push(
                blocks,
                self.informational("Distribution", &distro, |d| self.theme.escape(d).into_owned()),
            );
        }

        let now = self.probe.now();
        push(
            blocks,
            Section::new("Updated", now.format("%Y-%m-%d %H:%M:%S").to_string()),
        );

        let uptime = self.probe.uptime_secs();
        push(
            blocks,
            self.informational("Uptime", &uptime, |secs| format_duration(*secs)),
        );

        host.ok()
    }

    fn hardware_group(&self, blocks: &mut Vec<Block>) {
        if self.options.throttle_warnings {
            if let Some(state) = self.optional("Warning", self.probe.throttle()) {
                for section in self.throttle_sections(&state) {
                    push(blocks, section);
                }
            }
        }

        let volts = self.optional("CPU voltage", self.probe.core_volts());
        let cpu = self.probe.cpu();
        push(
            blocks,
            self.informational("CPU", &cpu, |c| self.render_cpu(c, volts)),
        );

        match self.probe.memory() {
            Ok(memory) => {
                push(blocks, self.storage_section(&memory.ram));
                if self.options.swap {
                    let section = match &memory.swap {
                        Some(swap) => self.storage_section(swap),
                        None => Section::new(
                            "Swap",
                            self.theme.paint(Token::Yellow, "Not configured."),
                        ),
                    };
                    push(blocks, section);
                }
            }
            Err(e) => {
                log_miss("Memory", &e);
                push(blocks, self.placeholder("Memory"));
                if self.options.swap {
                    push(blocks, self.placeholder("Swap"));
                }
            }
        }

        match self.probe.disks() {
            Ok(disks) => {
                let shown: Vec<&StorageReading> = if self.options.all_mounts {
                    disks.iter().collect()
                } else {
                    disks.iter().filter(|d| d.label == "Disk /").collect()
                };
                if shown.is_empty() {
                    push(blocks, self.placeholder("Storage"));
                }
                for disk in shown {
                    push(blocks, self.storage_section(disk));
                }
            }
            Err(e) => {
                log_miss("Storage", &e);
                push(blocks, self.placeholder("Storage"));
            }
        }
    }

    fn network_group(&self, blocks: &mut Vec<Block>) {
        let wifi = self.probe.wifi();
        push(blocks, self.informational("WiFi", &wifi, |w| self.render_wifi(w)));

        let ethernet = self.probe.ethernet();
        push(
            blocks,
            self.informational("Ethernet", &ethernet, |e| self.render_ethernet(e)),
        );

        let ping = self.probe.ping();
        push(blocks, self.informational("Network", &ping, |p| self.render_ping(p)));
    }

    fn journal_section(&self) -> Section {
        let journal = self.probe.journal();
        self.informational("Journal", &journal, |lines| {
            if lines.is_empty() {
                return "No entries.".to_string();
            }
            lines
                .iter()
                .map(|line| self.theme.escape(line).into_owned())
                .collect::<Vec<_>>()
                .join("\n")
        })
    }

    fn updates_section(&self) -> Section {
        let updates = self.probe.updates();
        self.informational("Updates", &updates, |u| self.render_updates(u))
    }

    /// Section for a source whose absence the reader should see.
    fn informational<T>(
        &self,
        label: &str,
        result: &Result<T, SourceError>,
        render: impl FnOnce(&T) -> String,
    ) -> Section {
        match result {
            Ok(value) => Section::new(label, render(value)),
            Err(e) => {
                log_miss(label, e);
                self.placeholder(label)
            }
        }
    }

    /// Value of a source that is silently skipped when absent.
    fn optional<T>(&self, label: &str, result: Result<T, SourceError>) -> Option<T> {
        result
            .map_err(|e| debug!("Skipping {}: {}", label, e))
            .ok()
    }

    fn placeholder(&self, label: &str) -> Section {
        Section::new(label, NO_DATA)
    }

    fn throttle_sections(&self, state: &ThrottleState) -> Vec<Section> {
        state
            .warning_lines()
            .into_iter()
            .map(|line| {
                Section::new("Warning", self.theme.paint(Token::Red, &line))
                    .with_emphasis(Token::Red)
            })
            .collect()
    }

    fn render_host(&self, host: &HostIdentity) -> String {
        format!(
            "{}, running Linux {} on {}",
            self.theme.paint(Token::Green, &self.theme.escape(&host.hostname)),
            self.theme.escape(&host.kernel),
            self.theme.escape(&host.arch)
        )
    }

    fn render_cpu(&self, cpu: &CpuReading, volts: Option<f64>) -> String {
        let load = cpu.load_percent();
        let mut details = vec![format!("{} core(s)", cpu.cores)];
        if let Some(freq) = cpu.freq_mhz {
            details.push(self.theme.paint(Token::Green, &format!("{:.1} MHz", freq)));
        }
        if let Some(temp) = cpu.temp_celsius {
            details.push(self.theme.paint(Token::Green, &format!("{:.1} °C", temp)));
        }
        if let Some(volts) = volts {
            details.push(self.theme.paint(Token::Green, &format!("{} V", volts)));
        }

        format!(
            "load average: {} ({})",
            self.theme.paint(percent_token(load), &format!("{:.1}%", load)),
            details.join(", ")
        )
    }

    fn storage_section(&self, reading: &StorageReading) -> Section {
        let body = format!(
            "{:.1} GB installed, {:.1} GB free ({} in use)",
            gigabytes(reading.total_bytes),
            gigabytes(reading.free_bytes),
            self.theme.paint(
                percent_token(reading.percent_used),
                &format!("{:.1}%", reading.percent_used)
            )
        );
        Section::new(reading.label.clone(), body)
    }

    fn render_wifi(&self, state: &NetworkLinkState) -> String {
        match state {
            NetworkLinkState::Disconnected => self.theme.paint(Token::Yellow, "Not connected."),
            NetworkLinkState::Connected(link) => {
                let quality = link.quality.percent();
                format!(
                    "Connected to {}, bitrate {}, link quality {}",
                    self.theme.paint(Token::Green, &self.theme.escape(&link.essid)),
                    self.theme.paint(Token::Green, &self.theme.escape(&link.bitrate)),
                    self.theme.paint(percent_token(100.0 - quality), &format!("{:.1}%", quality))
                )
            }
        }
    }

    fn render_ethernet(&self, link: &EthernetLink) -> String {
        match link {
            EthernetLink::NotConnected => self.theme.paint(Token::Yellow, "Not connected."),
            EthernetLink::Connected {
                interface,
                speed_mbps: Some(speed),
            } => format!(
                "Connected via {} with {}.",
                self.theme.escape(interface),
                self.theme.paint(Token::Green, &format!("{} Mb/s", speed))
            ),
            EthernetLink::Connected {
                interface,
                speed_mbps: None,
            } => format!(
                "Connected via {}, {}.",
                self.theme.escape(interface),
                self.theme.paint(Token::Yellow, "speed unknown")
            ),
        }
    }

    fn render_ping(&self, ping: &PingResult) -> String {
        let avg = ping.avg_rtt_ms.as_deref().unwrap_or(NO_RTT);
        format!(
            "Ping to {}: {} packets received, avg. RTT {}",
            self.theme.escape(&ping.target),
            self.theme.paint(
                percent_token(ping.loss_percent()),
                &format!("{}/{}", ping.received, ping.sent)
            ),
            self.theme.paint(Token::Green, &format!("{} ms", self.theme.escape(avg)))
        )
    }

    fn render_updates(&self, list: &PackageUpdateList) -> String {
        if list.updates.is_empty() {
            let checked = list
                .last_checked
                .map(|t| t.format("%Y-%m-%d %H:%M:%S").to_string())
                .unwrap_or_else(|| "unknown".to_string());
            return format!(
                "{} (last checked {})",
                self.theme.paint(Token::Yellow, "None available."),
                checked
            );
        }

        list.updates
            .iter()
            .map(|update| {
                format!(
                    "{}/{}",
                    self.theme.paint(Token::Green, &self.theme.escape(&update.name)),
                    self.theme.escape(&update.version_info)
                )
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// One report for a terminal: ANSI colours, no wrapper.
pub fn render_terminal(probe: &dyn SystemProbe) -> String {
    ReportAssembler::new(probe, &AnsiTheme).assemble().render()
}

/// One report for a browser, wrapped in a complete HTML document.
pub fn render_markup_document(probe: &dyn SystemProbe) -> String {
    let report = ReportAssembler::new(probe, &HtmlTheme).assemble();
    html_document(report.hostname(), &report.render())
}

/// Dark page with the report in a fixed-width block.
pub fn html_document(hostname: Option<&str>, inner: &str) -> String {
    let title = match hostname {
        Some(host) => format!("{} nanosysinfo", HtmlTheme.escape(host)),
        None => "nanosysinfo".to_string(),
    };
    format!(
        "<html><head><meta charset='UTF-8'/>\
         <style>body{{background-color:black;color:gray;}}</style>\
         <title>{}</title></head><body><pre>\n{}</pre></body></html>",
        title, inner
    )
}

fn push(blocks: &mut Vec<Block>, section: Section) {
    blocks.push(Block::Section(section));
}

fn log_miss(label: &str, err: &SourceError) {
    if err.is_missing() {
        debug!("{} source not present: {}", label, err);
    } else {
        warn!("{} source failed: {}", label, err);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use nanosys_common::{
        AnsiTheme, HtmlTheme, LinkQuality, MemoryReading, PackageUpdate, Result, WifiLink,
    };

    /// Every source fails except the ones the test switches on.
    #[derive(Default)]
    struct StubProbe {
        throttle_mask: Option<u32>,
        journal: Option<Vec<String>>,
        ping: Option<PingResult>,
    }

    fn unavailable<T>() -> Result<T> {
        Err(SourceError::Unavailable("stub".to_string()))
    }

    impl SystemProbe for StubProbe {
        fn now(&self) -> chrono::DateTime<chrono::Local> {
            chrono::Local.with_ymd_and_hms(2026, 10, 17, 9, 30, 0).unwrap()
        }
        fn host(&self) -> Result<HostIdentity> {
            unavailable()
        }
        fn distribution(&self) -> Result<String> {
            unavailable()
        }
        fn uptime_secs(&self) -> Result<u64> {
            unavailable()
        }
        fn throttle(&self) -> Result<ThrottleState> {
            self.throttle_mask
                .map(ThrottleState::from_bits)
                .ok_or_else(|| SourceError::Unavailable("vcgencmd".to_string()))
        }
        fn core_volts(&self) -> Result<f64> {
            unavailable()
        }
        fn cpu(&self) -> Result<CpuReading> {
            unavailable()
        }
        fn memory(&self) -> Result<MemoryReading> {
            unavailable()
        }
        fn disks(&self) -> Result<Vec<StorageReading>> {
            unavailable()
        }
        fn wifi(&self) -> Result<NetworkLinkState> {
            unavailable()
        }
        fn ethernet(&self) -> Result<EthernetLink> {
            unavailable()
        }
        fn ping(&self) -> Result<PingResult> {
            self.ping.clone().ok_or_else(|| SourceError::parse("no summary"))
        }
        fn journal(&self) -> Result<Vec<String>> {
            self.journal.clone().ok_or_else(|| SourceError::parse("stub"))
        }
        fn updates(&self) -> Result<PackageUpdateList> {
            unavailable()
        }
    }

    #[test]
    fn test_everything_missing_still_renders() {
        let probe = StubProbe::default();
        let report = ReportAssembler::new(&probe, &AnsiTheme).assemble();

        assert_eq!(
            report.labels(),
            vec![
                "Hostinfo",
                "Distribution",
                "Updated",
                "Uptime",
                "CPU",
                "Memory",
                "Swap",
                "Storage",
                "WiFi",
                "Ethernet",
                "Network",
                "Journal",
                "Updates",
            ]
        );
        assert_eq!(report.section("CPU").unwrap().body, NO_DATA);
        assert_eq!(report.section("Updated").unwrap().body, "2026-10-17 09:30:00");
        assert!(report.hostname().is_none());
    }

    #[test]
    fn test_separators_between_groups() {
        let probe = StubProbe::default();
        let report = ReportAssembler::new(&probe, &AnsiTheme).assemble();
        let separators = report
            .blocks()
            .iter()
            .filter(|b| **b == Block::Separator)
            .count();
        assert_eq!(separators, 4);
        assert!(report.render().contains("\n\n"));
    }

    #[test]
    fn test_throttle_warnings_are_red_and_conditional() {
        let probe = StubProbe {
            throttle_mask: Some(0x50005),
            ..Default::default()
        };
        let report = ReportAssembler::new(&probe, &AnsiTheme).assemble();
        let warnings: Vec<&Section> = report.sections().filter(|s| s.label == "Warning").collect();
        assert_eq!(warnings.len(), 2);
        assert_eq!(warnings[0].emphasis, Token::Red);
        assert!(warnings[0].body.contains("currently: undervolted, throttled"));
        assert!(warnings[1].body.contains("previously: undervolted, throttled"));

        let clear = StubProbe {
            throttle_mask: Some(0),
            ..Default::default()
        };
        let report = ReportAssembler::new(&clear, &AnsiTheme).assemble();
        assert!(report.section("Warning").is_none());
    }

    #[test]
    fn test_zero_echoes_render_infinity() {
        let probe = StubProbe {
            ping: Some(PingResult {
                target: "8.8.8.8".to_string(),
                sent: 5,
                received: 0,
                avg_rtt_ms: None,
            }),
            ..Default::default()
        };
        let report = ReportAssembler::new(&probe, &AnsiTheme).assemble();
        let body = &report.section("Network").unwrap().body;
        assert!(body.contains("\x1b[31m0/5\x1b[0m"));
        assert!(body.contains("∞ ms"));
    }

    #[test]
    fn test_journal_lines_are_escaped_in_markup() {
        let probe = StubProbe {
            journal: Some(vec!["kernel: <3>oops & more".to_string()]),
            ..Default::default()
        };
        let report = ReportAssembler::new(&probe, &HtmlTheme).assemble();
        assert_eq!(
            report.section("Journal").unwrap().body,
            "kernel: &lt;3&gt;oops &amp; more"
        );
    }

    #[test]
    fn test_options_drop_optional_parts() {
        let probe = StubProbe {
            throttle_mask: Some(0x1),
            ..Default::default()
        };
        let options = ReportOptions {
            distribution: false,
            throttle_warnings: false,
            swap: false,
            all_mounts: false,
            journal: false,
        };
        let report = ReportAssembler::new(&probe, &AnsiTheme)
            .with_options(options)
            .assemble();
        let labels = report.labels();
        for gone in ["Distribution", "Warning", "Swap", "Journal"] {
            assert!(!labels.contains(&gone), "{} should be omitted", gone);
        }
    }

    #[test]
    fn test_html_document() {
        let page = html_document(Some("pi<4>"), "body\n");
        assert!(page.starts_with("<html><head><meta charset='UTF-8'/><style>"));
        assert!(page.contains("<title>pi&lt;4&gt; nanosysinfo</title>"));
        assert!(page.ends_with("<pre>\nbody\n</pre></body></html>"));
    }

    #[test]
    fn test_body_renderers() {
        let probe = StubProbe::default();
        let assembler = ReportAssembler::new(&probe, &AnsiTheme);

        let wifi = assembler.render_wifi(&NetworkLinkState::Connected(WifiLink {
            essid: "home".to_string(),
            bitrate: "72.2 Mb/s".to_string(),
            quality: LinkQuality {
                numerator: 21.0,
                denominator: 70.0,
            },
        }));
        // 30% quality is 70% bad
        assert!(wifi.contains("\x1b[33m30.0%\x1b[0m"));

        let updates = assembler.render_updates(&PackageUpdateList {
            updates: vec![PackageUpdate {
                name: "vim".to_string(),
                version_info: "stable 2:9.0 arm64".to_string(),
            }],
            last_checked: None,
        });
        assert_eq!(updates, "\x1b[32mvim\x1b[0m/stable 2:9.0 arm64");

        let none = assembler.render_updates(&PackageUpdateList {
            updates: vec![],
            last_checked: None,
        });
        assert!(none.contains("None available."));
        assert!(none.ends_with("(last checked unknown)"));
    }

    #[test]
    fn test_no_updates_shows_parseable_check_time() {
        let probe = StubProbe::default();
        let assembler = ReportAssembler::new(&probe, &AnsiTheme);
        let checked = chrono::Local.with_ymd_and_hms(2026, 10, 1, 8, 5, 9).unwrap();

        let none = assembler.render_updates(&PackageUpdateList {
            updates: vec![],
            last_checked: Some(checked),
        });
        assert!(none.starts_with("\x1b[33mNone available.\x1b[0m"));

        let stamp = none
            .split("last checked ")
            .nth(1)
            .and_then(|rest| rest.strip_suffix(')'))
            .unwrap();
        let parsed = chrono::NaiveDateTime::parse_from_str(stamp, "%Y-%m-%d %H:%M:%S").unwrap();
        assert_eq!(parsed, checked.naive_local());
    }

    #[test]
    fn test_ethernet_renderer() {
        let probe = StubProbe::default();
        let assembler = ReportAssembler::new(&probe, &AnsiTheme);

        let known = assembler.render_ethernet(&EthernetLink::Connected {
            interface: "eth0".to_string(),
            speed_mbps: Some(1000),
        });
        assert_eq!(known, "Connected via eth0 with \x1b[32m1000 Mb/s\x1b[0m.");

        let unknown = assembler.render_ethernet(&EthernetLink::Connected {
            interface: "end0".to_string(),
            speed_mbps: None,
        });
        assert_eq!(unknown, "Connected via end0, \x1b[33mspeed unknown\x1b[0m.");

        let down = assembler.render_ethernet(&EthernetLink::NotConnected);
        assert_eq!(down, "\x1b[33mNot connected.\x1b[0m");
    }
}
