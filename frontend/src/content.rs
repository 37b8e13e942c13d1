pub const CHECKLIST_ITEMS: [&str; 12] = [
    "Flaky or slow CI, reruns fix it sometimes",
    "No tracing across services or jobs",
    "We don't track SLOs or error budgets",
    "Rollbacks are manual / risky",
    "Secrets once leaked (or might be)",
    "Schema changes occasionally cause outages",
    "Alarming is noisy or missing golden signals",
    "Auth/session code is fragile or copy-pasted",
    "High cloud bill surprises w/ no owner",
    "Test suite is slow or red most days",
    "Deploys bunch features w/ big blast radius",
    "No clear ADRs; decisions live in Slack",
];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OutcomeMetric {
    pub metric: &'static str,
    pub baseline: u32,
    pub target: u32,
}

pub const OUTCOMES: [OutcomeMetric; 4] = [
    OutcomeMetric { metric: "Deploys/wk", baseline: 2, target: 8 },
    OutcomeMetric { metric: "Lead time (hrs)", baseline: 36, target: 6 },
    OutcomeMetric { metric: "MTTR (hrs)", baseline: 12, target: 2 },
    OutcomeMetric { metric: "Change fail %", baseline: 35, target: 10 },
];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Resource {
    pub name: &'static str,
    pub href: &'static str,
}

pub const RESOURCES: [Resource; 10] = [
    Resource { name: "OpenTelemetry", href: "https://opentelemetry.io/" },
    Resource { name: "DORA & DevOps Research", href: "https://cloud.google.com/devops" },
    Resource { name: "AWS Well-Architected", href: "https://aws.amazon.com/architecture/well-architected/" },
    Resource { name: "OWASP ASVS", href: "https://owasp.org/www-project-application-security-verification-standard/" },
    Resource { name: "Spectral (OpenAPI linter)", href: "https://github.com/stoplightio/spectral" },
    Resource { name: "TruffleHog (secret scanning)", href: "https://github.com/trufflesecurity/trufflehog" },
    Resource { name: "Node Best Practices", href: "https://github.com/goldbergyoni/nodebestpractices" },
    Resource { name: "typescript-eslint", href: "https://typescript-eslint.io/" },
    Resource { name: "PostgreSQL docs (TLS)", href: "https://www.postgresql.org/docs/current/ssl-tcp.html" },
    Resource { name: "oneNDA (mutual NDA)", href: "https://onenda.org/" },
];

pub const ONENDA_URL: &str = "https://onenda.org/";

/// Section anchors shown in the header and footer.
pub const NAV_LINKS: [(&str, &str); 5] = [
    ("#offers", "Offers"),
    ("#process", "Process"),
    ("#score", "Vibe Score"),
    ("#about", "About"),
    ("#contact", "Contact"),
];

// Icons are emoji; the page ships no icon font.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Offer {
    pub name: &'static str,
    pub icon: &'static str,
    pub terms: &'static str,
    pub bullets: &'static [(&'static str, &'static str)],
    pub cta: &'static str,
}

pub const OFFERS: [Offer; 4] = [
    Offer {
        name: "Firebreak Triage",
        icon: "🔨",
        terms: "1 week · $10–15k",
        bullets: &[
            ("🛡️", "Stabilize P0s, establish SLOs & alarms"),
            ("🔧", "Rollback plan, on-call runbook, pager policy"),
            ("📈", "Day-5 report: top risks, 30-day plan"),
        ],
        cta: "Start Firebreak",
    },
    Offer {
        name: "Codebase Audit & Roadmap",
        icon: "⏱️",
        terms: "2 weeks · $18–25k",
        bullets: &[
            ("🖥️", "OTel tracing & dashboards across Node/Python"),
            ("🔒", "ASVS spot-check, AWS Well-Architected, PG hardening"),
            ("🔧", "ESLint/TS, Pytest/Ruff, Spectral, TruffleHog in CI"),
            ("📈", "30/60/90 plan with costed backlog"),
        ],
        cta: "Book audit",
    },
    Offer {
        name: "Modernization Sprint",
        icon: "☁️",
        terms: "4–6 weeks · $40–75k",
        bullets: &[
            ("🗄️", "Perf/auth/data model refactors"),
            ("☁️", "AWS infra fixes, CI/CD hardening, blue/green/canary"),
            ("🛡️", "Rollback strategy, seed test suite, runbooks"),
        ],
        cta: "Discuss sprint",
    },
    Offer {
        name: "Advisory Retainer",
        icon: "📅",
        terms: "$6–12k/mo · 2–4 hrs/wk",
        bullets: &[
            ("📈", "Architecture reviews & roadmap sanity checks"),
            ("🛡️", "Incident postmortems & risk burn-down"),
            ("🔧", "Hiring help for senior/Staff ICs"),
        ],
        cta: "Hold a slot",
    },
];

pub const PROCESS_STEPS: [(&str, &str, &str); 3] = [
    (
        "⏱️",
        "1) Diagnose",
        "Rapid baselining: OTel traces, DORA Four Keys, SLOs. Security pass (ASVS), AWS Well-Architected, PG checks.",
    ),
    (
        "🛡️",
        "2) Stabilize",
        "Fix top risks, harden CI/CD, rollback/canary, establish clean on-call, reduce MTTR, speed up deploys.",
    ),
    (
        "🔧",
        "3) Guardrail",
        "ADRs, templates, ownership, and minimal rules in code/infra so the team moves fast without regressions.",
    ),
];

pub const COMMON_VIBES: [&str; 6] = [
    "Flaky tests & mystery alerts",
    "Deploy fear & manual rollbacks",
    "Slow requests / p95 regressions",
    "Copy-pasted auth / fragile sessions",
    "Cloud cost surprises",
    "Schema drift & risky migrations",
];

/// Hero stat tiles: (value, caption).
pub const HERO_STATS: [(&str, &str); 2] = [
    ("→ 2x", "Deploy frequency"),
    ("↓ 50%", "MTTR within 30 days"),
];

pub const SKILLS: [(&str, &str); 6] = [
    ("🖥️", "Node.js / TypeScript"),
    ("🖥️", "Python"),
    ("🗄️", "PostgreSQL"),
    ("☁️", "AWS"),
    ("📈", "OpenTelemetry"),
    ("🛡️", "SRE & DORA practices"),
];

pub const PLAYBOOK: [&str; 5] = [
    "OTel tracing + dashboards across hot paths",
    "SLOs + golden signals + clean paging policy",
    "CI hardening, test parallelism, secrets scanning",
    "DB migration safety & rollback strategy",
    "ADRs & PR templates with acceptance criteria",
];

pub const PAPERWORK: [&str; 3] = [
    "Mutual NDA available (oneNDA)",
    "Standard MSA/SOW with outcome-based pricing",
    "Remote-first across US time zones",
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn checklist_has_twelve_distinct_items() {
        let unique: HashSet<_> = CHECKLIST_ITEMS.iter().collect();
        assert_eq!(unique.len(), 12);
        assert!(CHECKLIST_ITEMS.iter().all(|item| !item.trim().is_empty()));
    }

    #[test]
    fn resources_are_https_and_unique() {
        let names: HashSet<_> = RESOURCES.iter().map(|r| r.name).collect();
        assert_eq!(names.len(), RESOURCES.len());
        assert!(RESOURCES.iter().all(|r| r.href.starts_with("https://")));
        assert!(RESOURCES.iter().any(|r| r.href == ONENDA_URL));
    }

    #[test]
    fn outcomes_improve_in_the_right_direction() {
        let (more, less): (Vec<&OutcomeMetric>, Vec<&OutcomeMetric>) =
            OUTCOMES.iter().partition(|m| m.metric.starts_with("Deploys"));
        assert!(more.iter().all(|m| m.target > m.baseline));
        assert!(less.iter().all(|m| m.target < m.baseline));
    }

    #[test]
    fn nav_links_are_anchors() {
        assert!(NAV_LINKS.iter().all(|(href, _)| href.starts_with('#')));
        assert!(NAV_LINKS.iter().any(|(href, _)| *href == "#score"));
    }

    #[test]
    fn every_offer_has_bullets() {
        assert!(OFFERS.iter().all(|o| (3..=4).contains(&o.bullets.len())));
    }
}
