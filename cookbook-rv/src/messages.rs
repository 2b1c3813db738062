//! User-facing text for the recipe viewer

use cookbook_common::Locale;

#[derive(Debug, Clone, Copy)]
pub struct Messages {
    locale: Locale,
}

impl Messages {
    pub fn new(locale: Locale) -> Self {
        Self { locale }
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    pub fn title(&self) -> &'static str {
        match self.locale {
            Locale::ZhTw => "食譜",
            Locale::En => "Recipe",
        }
    }

    /// Counter text for a 0-based `index` out of `count` pages
    pub fn page_counter(&self, index: Option<usize>, count: usize) -> String {
        match (self.locale, index) {
            (Locale::ZhTw, Some(i)) => format!("第 {} / {} 頁", i + 1, count),
            (Locale::ZhTw, None) => "0 / 0 頁".to_string(),
            (Locale::En, Some(i)) => format!("page {} / {}", i + 1, count),
            (Locale::En, None) => "page 0 / 0".to_string(),
        }
    }

    pub fn no_data(&self) -> &'static str {
        match self.locale {
            Locale::ZhTw => "尚無資料",
            Locale::En => "No data",
        }
    }

    pub fn step_prefix(&self) -> &'static str {
        match self.locale {
            Locale::ZhTw => "步驟：",
            Locale::En => "Step: ",
        }
    }

    pub fn narrate_prefix(&self) -> &'static str {
        match self.locale {
            Locale::ZhTw => "說白：",
            Locale::En => "Narration: ",
        }
    }

    pub fn prev_button(&self) -> &'static str {
        match self.locale {
            Locale::ZhTw => "上一頁",
            Locale::En => "Previous",
        }
    }

    pub fn next_button(&self) -> &'static str {
        match self.locale {
            Locale::ZhTw => "下一頁",
            Locale::En => "Next",
        }
    }
}
