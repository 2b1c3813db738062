//! User-facing text for the budget selector

use cookbook_common::Locale;
use std::path::Path;

/// Message table for one locale
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
            Locale::ZhTw => "預算食譜",
            Locale::En => "Budget recipes",
        }
    }

    pub fn catalog_loaded(&self, count: usize) -> String {
        match self.locale {
            Locale::ZhTw => format!("已載入 {} 筆節約食譜，輸入預算開始篩選。", count),
            Locale::En => format!("Loaded {} budget recipes. Enter a budget to start filtering.", count),
        }
    }

    pub fn catalog_failed(&self) -> String {
        match self.locale {
            Locale::ZhTw => "無法載入食譜清單，請重新整理。".to_string(),
            Locale::En => "Could not load the recipe list. Please reload.".to_string(),
        }
    }

    pub fn filtered(&self, count: usize) -> String {
        match self.locale {
            Locale::ZhTw => format!("找到 {} 道符合預算的食譜。", count),
            Locale::En => format!("Found {} recipes within budget.", count),
        }
    }

    pub fn selected(&self, name: &str) -> String {
        match self.locale {
            Locale::ZhTw => format!("已選擇「{}」。", name),
            Locale::En => format!("Selected \"{}\".", name),
        }
    }

    pub fn select_first(&self) -> String {
        match self.locale {
            Locale::ZhTw => "請先選擇一個食譜。".to_string(),
            Locale::En => "Please select a recipe first.".to_string(),
        }
    }

    pub fn saved(&self) -> String {
        match self.locale {
            Locale::ZhTw => "已儲存食譜，可到食譜頁面查看步驟。".to_string(),
            Locale::En => "Recipe saved. Open the recipe viewer to follow the steps.".to_string(),
        }
    }

    pub fn saved_and_exported(&self, path: &Path) -> String {
        match self.locale {
            Locale::ZhTw => format!("已把食譜寫入 {}，可覆蓋你的資料檔。", path.display()),
            Locale::En => format!(
                "Recipe written to {}; you can replace your data file with it.",
                path.display()
            ),
        }
    }

    pub fn save_failed(&self) -> String {
        match self.locale {
            Locale::ZhTw => "儲存失敗，請稍後再試。".to_string(),
            Locale::En => "Save failed. Please try again later.".to_string(),
        }
    }

    pub fn no_match(&self) -> &'static str {
        match self.locale {
            Locale::ZhTw => "找不到符合預算的食譜，試試提高預算或查看全部。",
            Locale::En => "No recipes match this budget. Try a higher budget or show all.",
        }
    }

    pub fn selection_empty(&self) -> &'static str {
        match self.locale {
            Locale::ZhTw => "尚未選擇食譜，請先輸入預算並挑選。",
            Locale::En => "No recipe selected yet. Enter a budget and pick one.",
        }
    }

    pub fn recipe_meta(&self, cost: f64, duration: f64, servings: f64) -> String {
        match self.locale {
            Locale::ZhTw => format!("預估花費：約 {} 元 · {} 分鐘 · {} 人份", cost, duration, servings),
            Locale::En => format!(
                "Estimated cost: about {} · {} min · serves {}",
                cost, duration, servings
            ),
        }
    }

    pub fn budget_label(&self) -> &'static str {
        match self.locale {
            Locale::ZhTw => "預算（元）",
            Locale::En => "Budget",
        }
    }

    pub fn filter_button(&self) -> &'static str {
        match self.locale {
            Locale::ZhTw => "篩選",
            Locale::En => "Filter",
        }
    }

    pub fn pick_button(&self) -> &'static str {
        match self.locale {
            Locale::ZhTw => "選擇這道食譜",
            Locale::En => "Pick this recipe",
        }
    }

    pub fn save_button(&self) -> &'static str {
        match self.locale {
            Locale::ZhTw => "儲存到食譜頁",
            Locale::En => "Save for the recipe viewer",
        }
    }

    /// Label of the n-th (1-based) ingredient item
    pub fn ingredient_label(&self, n: usize) -> String {
        match self.locale {
            Locale::ZhTw => format!("食材 {}", n),
            Locale::En => format!("ingredient {}", n),
        }
    }

    /// Label of the n-th (1-based) step item
    pub fn step_label(&self, n: usize) -> String {
        match self.locale {
            Locale::ZhTw => format!("步驟 {}", n),
            Locale::En => format!("step {}", n),
        }
    }
}
