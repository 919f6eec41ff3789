//! Fixed copy for the page: header, stage cards, setup guides, and reference grids.
//!
//! Everything here is `'static` data; the TUI only reads it while rendering.

/// Header and footer text framing both tabs.
pub const PAGE_TITLE: &str = "YouTube → TikTok Automation";
pub const PAGE_SUBTITLE: &str = "Automated Pabbly Workflow using 100% Free Tools";
pub const PAGE_BADGE: &str = "No Paid APIs Required";
pub const PAGE_FOOTER: &str = "All tools used in this workflow are 100% free";

/// An outbound reference. The TUI prints the label and URL; nothing is fetched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExternalLink {
    pub label: &'static str,
    pub url: &'static str,
}

pub const GOOGLE_CLOUD_CONSOLE: ExternalLink = ExternalLink {
    label: "console.cloud.google.com",
    url: "https://console.cloud.google.com",
};
pub const HUGGING_FACE: ExternalLink = ExternalLink {
    label: "huggingface.co",
    url: "https://huggingface.co",
};
pub const PUBLER: ExternalLink = ExternalLink {
    label: "publer.io",
    url: "https://publer.io",
};
pub const PABBLY_CONNECT: ExternalLink = ExternalLink {
    label: "Pabbly Connect",
    url: "https://www.pabbly.com/connect",
};
pub const COBALT_TOOLS: ExternalLink = ExternalLink {
    label: "cobalt.tools",
    url: "https://cobalt.tools",
};

/// Summary card shown above the JSON on the workflow tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PipelineStage {
    pub number: u8,
    pub title: &'static str,
    pub summary: &'static str,
    pub tool: &'static str,
}

pub const PIPELINE_STAGES: &[PipelineStage] = &[
    PipelineStage {
        number: 1,
        title: "YouTube Search",
        summary: "Search for \"imagine OR imagines\" videos from last 48 hours",
        tool: "YouTube Data API v3 / RSS Feed (Free)",
    },
    PipelineStage {
        number: 2,
        title: "Filter & Sort by Engagement",
        summary: "Sort by views + comments, select top 3",
        tool: "Pabbly Filter (Built-in)",
    },
    PipelineStage {
        number: 3,
        title: "Download Videos (MP4)",
        summary: "Download unmodified MP4 files using free API",
        tool: "cobalt.tools API (Free, no auth)",
    },
    PipelineStage {
        number: 4,
        title: "Generate Caption & Hashtags",
        summary: "AI-generated engaging caption + 10 Wattpad-themed hashtags",
        tool: "Hugging Face API / GPT4Free (Free)",
    },
    PipelineStage {
        number: 5,
        title: "Schedule Posts",
        summary: "Best USA times: 9 AM, 12 PM, 5 PM, 7 PM EST",
        tool: "Publer / Buffer (Free tier)",
    },
    PipelineStage {
        number: 6,
        title: "Return Results",
        summary: "Email with video links, captions, and scheduled times",
        tool: "Pabbly Email (Built-in)",
    },
];

pub const INSTRUCTIONS_TITLE: &str = "Step-by-Step Setup Instructions";
pub const PREREQUISITES_TITLE: &str = "Prerequisites";
pub const SETUP_STEPS_TITLE: &str = "Setup Steps";
pub const FREE_TOOLS_TITLE: &str = "Free Tools Used";

pub const PREREQUISITES: &[&str] = &[
    "Pabbly Connect account (Free plan: 100 tasks/month)",
    "YouTube Data API key (Free from Google Cloud Console)",
    "Hugging Face API key (Free, unlimited)",
    "Publer account (Free: unlimited scheduling)",
];

/// One line inside a setup guide.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuideItem {
    Text(&'static str),
    /// Leading text followed by a link, e.g. "Go to <link>".
    Link { lead: &'static str, link: ExternalLink },
}

/// Per-step settings block inside the last setup guide.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConfigurationNote {
    pub title: &'static str,
    pub entries: &'static [&'static str],
}

/// A numbered setup guide. Guides carry either ordered `items` or `notes`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SetupGuide {
    pub number: u8,
    pub title: &'static str,
    pub items: &'static [GuideItem],
    pub notes: &'static [ConfigurationNote],
}

pub const SETUP_GUIDES: &[SetupGuide] = &[
    SetupGuide {
        number: 1,
        title: "Get YouTube API Key",
        items: &[
            GuideItem::Link {
                lead: "Go to",
                link: GOOGLE_CLOUD_CONSOLE,
            },
            GuideItem::Text("Create new project → Enable YouTube Data API v3"),
            GuideItem::Text("Credentials → Create API Key"),
            GuideItem::Text("Copy the API key"),
        ],
        notes: &[],
    },
    SetupGuide {
        number: 2,
        title: "Get Hugging Face API Key",
        items: &[
            GuideItem::Link {
                lead: "Go to",
                link: HUGGING_FACE,
            },
            GuideItem::Text("Sign up for free account"),
            GuideItem::Text("Settings → Access Tokens → New Token"),
            GuideItem::Text("Copy the token"),
        ],
        notes: &[],
    },
    SetupGuide {
        number: 3,
        title: "Setup Publer",
        items: &[
            GuideItem::Link {
                lead: "Go to",
                link: PUBLER,
            },
            GuideItem::Text("Sign up for free account"),
            GuideItem::Text("Connect your TikTok account"),
            GuideItem::Text("Get API credentials from Settings → Integrations"),
        ],
        notes: &[],
    },
    SetupGuide {
        number: 4,
        title: "Create Pabbly Workflow",
        items: &[
            GuideItem::Link {
                lead: "Login to",
                link: PABBLY_CONNECT,
            },
            GuideItem::Text("Create New Workflow"),
            GuideItem::Text("Add trigger: Schedule (Every 24 hours)"),
            GuideItem::Text("Follow the workflow steps from the JSON above"),
        ],
        notes: &[],
    },
    SetupGuide {
        number: 5,
        title: "Configure Each Step",
        items: &[],
        notes: &[
            ConfigurationNote {
                title: "YouTube Search",
                entries: &[
                    "App: YouTube Data API v3",
                    "Action: Search List",
                    "Query: imagine OR imagines",
                    "Published After: {{now - 48h}}",
                    "Order: date",
                    "Max Results: 10",
                ],
            },
            ConfigurationNote {
                title: "Download Video",
                entries: &[
                    "App: HTTP/Webhooks",
                    "Method: POST",
                    "URL: https://api.cobalt.tools/api/json",
                    "Body: { \"url\": \"{{youtube_url}}\", \"videoQuality\": \"max\" }",
                ],
            },
            ConfigurationNote {
                title: "Generate Caption",
                entries: &[
                    "App: HTTP/Webhooks",
                    "Method: POST",
                    "URL: https://api-inference.huggingface.co/models/gpt2",
                    "Headers: Authorization: Bearer YOUR_HF_TOKEN",
                    "Prompt: Create TikTok caption for: {{video_title}}",
                ],
            },
        ],
    },
];

/// Cell in the free-tools grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FreeTool {
    pub name: &'static str,
    pub description: &'static str,
    pub link: ExternalLink,
}

pub const FREE_TOOLS: &[FreeTool] = &[
    FreeTool {
        name: "cobalt.tools",
        description: "Free YouTube downloader API",
        link: COBALT_TOOLS,
    },
    FreeTool {
        name: "Hugging Face",
        description: "Free AI text generation",
        link: HUGGING_FACE,
    },
    FreeTool {
        name: "Publer",
        description: "Free TikTok scheduling",
        link: PUBLER,
    },
    FreeTool {
        name: "YouTube Data API",
        description: "Free video search & metadata",
        link: ExternalLink {
            label: "Google Cloud",
            url: "https://console.cloud.google.com",
        },
    },
];

/// Cell in the posting-time grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PostingTime {
    pub time: &'static str,
    pub label: &'static str,
}

pub const POSTING_TIMES_TITLE: &str = "Best TikTok Posting Times (USA)";

pub const POSTING_TIMES: &[PostingTime] = &[
    PostingTime {
        time: "9:00 AM EST",
        label: "Morning commute",
    },
    PostingTime {
        time: "12:00 PM EST",
        label: "Lunch break",
    },
    PostingTime {
        time: "5:00 PM EST",
        label: "After work",
    },
    PostingTime {
        time: "7:00 PM EST",
        label: "Prime time",
    },
];
