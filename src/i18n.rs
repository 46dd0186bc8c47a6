#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Locale {
    En,
    ZhTw,
}

impl Locale {
    pub const ALL: [Locale; 2] = [Locale::En, Locale::ZhTw];

    pub fn from_segment(segment: &str) -> Self {
        match segment {
            "zh-TW" => Locale::ZhTw,
            _ => Locale::En,
        }
    }

    pub fn segment(&self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::ZhTw => "zh-TW",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Locale::En => "English",
            Locale::ZhTw => "繁體中文",
        }
    }
}

/// Pure label lookup. Unknown keys fall back to the key itself so a missing
/// translation shows up on screen instead of crashing anything.
pub fn t<'a>(locale: Locale, key: &'a str) -> &'a str {
    for (label_key, en, zh) in LABELS {
        if *label_key == key {
            return match locale {
                Locale::En => en,
                Locale::ZhTw => zh,
            };
        }
    }
    key
}

const LABELS: &[(&str, &str, &str)] = &[
    ("app.title", "Backoffice", "後台管理"),
    ("nav.dashboard", "Dashboard", "總覽"),
    ("nav.customers", "Customers", "客戶"),
    ("nav.deals", "Deals", "交易"),
    ("nav.tickets", "Tickets", "工單"),
    ("nav.documents", "Documents", "文件"),
    ("search.placeholder", "Search", "搜尋"),
    ("search.clear", "Clear", "清除"),
    ("filters.clear", "Clear filters", "清除篩選"),
    ("filters.results", "results", "筆結果"),
    ("facet.all", "All", "全部"),
    ("pager.prev", "Previous", "上一頁"),
    ("pager.next", "Next", "下一頁"),
    ("pager.page", "Page", "頁"),
    ("pager.of", "of", "共"),
    ("daterange.title", "Date range", "日期區間"),
    ("daterange.clear", "Clear range", "清除區間"),
    ("daterange.pending", "Pick an end date", "請選擇結束日期"),
    ("daterange.any", "Any dates", "不限日期"),
    ("column.name", "Name", "名稱"),
    ("column.email", "Email", "電子郵件"),
    ("column.country", "Country", "國家"),
    ("column.status", "Status", "狀態"),
    ("column.tier", "Tier", "等級"),
    ("column.joined", "Joined", "加入日期"),
    ("column.ltv", "Lifetime value", "累計營收"),
    ("column.title", "Title", "標題"),
    ("column.customer", "Customer", "客戶"),
    ("column.stage", "Stage", "階段"),
    ("column.value", "Value", "金額"),
    ("column.closing", "Closing", "結案日期"),
    ("column.subject", "Subject", "主旨"),
    ("column.priority", "Priority", "優先度"),
    ("column.opened", "Opened", "開立日期"),
    ("column.kind", "Kind", "類型"),
    ("column.owner", "Owner", "負責人"),
    ("column.updated", "Updated", "更新日期"),
    ("column.size", "Size (KB)", "大小 (KB)"),
    ("customer.status.active", "Active", "使用中"),
    ("customer.status.inactive", "Inactive", "停用"),
    ("customer.status.prospect", "Prospect", "潛在客戶"),
    ("customer.tier.bronze", "Bronze", "銅級"),
    ("customer.tier.silver", "Silver", "銀級"),
    ("customer.tier.gold", "Gold", "金級"),
    ("deal.stage.lead", "Lead", "開發中"),
    ("deal.stage.proposal", "Proposal", "提案"),
    ("deal.stage.negotiation", "Negotiation", "議價"),
    ("deal.stage.won", "Won", "成交"),
    ("deal.stage.lost", "Lost", "未成交"),
    ("ticket.priority.low", "Low", "低"),
    ("ticket.priority.medium", "Medium", "中"),
    ("ticket.priority.high", "High", "高"),
    ("ticket.priority.urgent", "Urgent", "緊急"),
    ("ticket.status.open", "Open", "開啟"),
    ("ticket.status.pending", "Pending", "處理中"),
    ("ticket.status.resolved", "Resolved", "已解決"),
    ("ticket.status.closed", "Closed", "已結案"),
    ("document.kind.contract", "Contract", "合約"),
    ("document.kind.invoice", "Invoice", "發票"),
    ("document.kind.proposal", "Proposal", "提案書"),
    ("document.kind.report", "Report", "報表"),
    ("dashboard.customers", "Customers", "客戶數"),
    ("dashboard.open_tickets", "Open tickets", "未結工單"),
    ("dashboard.won_deals", "Won deals", "成交交易"),
    ("dashboard.revenue", "Revenue in range", "區間營收"),
    ("dashboard.per_day", "per day", "每日"),
    ("dashboard.ticket_focus", "Ticket focus", "工單焦點"),
];
