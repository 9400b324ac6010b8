#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

//! eframe/egui 기반 데스크톱 GUI 진입점.

use eframe::{egui, App, Frame};
use emi_calculator::{
    config,
    debounce::Debouncer,
    field::LoanField,
    finance::{self, Breakdown},
    form::{Evaluation, LoanForm},
    i18n,
    normalize::{self, format_as_currency_display},
};
use image::GenericImageView;
use std::{
    env,
    f32::consts::{FRAC_PI_2, TAU},
    fs,
    path::Path,
    time::{Duration, Instant},
};
use tracing_subscriber::EnvFilter;

/// 슬라이더 채움/이자 조각 색.
const COLOR_PRIMARY: egui::Color32 = egui::Color32::from_rgb(0xe4, 0x56, 0x03);
/// 슬라이더 빈 구간/원금 조각 색.
const COLOR_GRAY_LIGHT: egui::Color32 = egui::Color32::from_rgb(0xdd, 0xdd, 0xdd);

fn main() -> Result<(), eframe::Error> {
    init_tracing();

    // CLI 언어 옵션 처리: --lang xx 또는 --lang=xx (xx: auto/en-in/en-us/ko-kr)
    let mut cli_lang: Option<String> = None;
    let args: Vec<String> = env::args().collect();
    let mut i = 1;
    while i < args.len() {
        let a = &args[i];
        if let Some(val) = a.strip_prefix("--lang=") {
            cli_lang = Some(val.to_string());
        } else if (a == "--lang" || a == "-L") && i + 1 < args.len() {
            cli_lang = Some(args[i + 1].clone());
            i += 1;
        }
        i += 1;
    }

    let mut viewport = egui::ViewportBuilder::default()
        .with_inner_size([880.0, 620.0])
        .with_transparent(true);
    if let Some(icon) = load_app_icon() {
        viewport = viewport.with_icon(icon);
    }
    let options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };
    let mut app_cfg = config::load_or_default().unwrap_or_else(|e| {
        tracing::warn!("config error, falling back to defaults: {e}");
        config::Config::default()
    });
    if let Some(lang_cli) = cli_lang {
        app_cfg.language = i18n::resolve_language(&lang_cli, Some(app_cfg.language.as_str()));
    }
    eframe::run_native(
        "EMI Calculator",
        options,
        Box::new(move |cc| {
            if let Err(e) = setup_fonts(&cc.egui_ctx) {
                tracing::warn!("font setup: {e}");
            }
            Box::new(GuiApp::new(app_cfg.clone()))
        }),
    )
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn load_app_icon() -> Option<egui::IconData> {
    let search = ["icon.png", "assets/icon.png", "../assets/icon.png"];
    let path = search.iter().find(|p| Path::new(*p).exists())?;
    let bytes = fs::read(path).ok()?;
    let img = image::load_from_memory(&bytes).ok()?;
    let rgba = img.to_rgba8();
    let (w, h) = img.dimensions();
    Some(egui::IconData {
        rgba: rgba.into_raw(),
        width: w,
        height: h,
    })
}

/// 바이너리 폰트 바이트를 기본 폰트 뒤의 대체 폰트로 등록한다.
fn apply_font_bytes(ctx: &egui::Context, bytes: Vec<u8>, name: &str) {
    let mut fonts = egui::FontDefinitions::default();
    let font_name = name.to_string();
    fonts
        .font_data
        .insert(font_name.clone(), egui::FontData::from_owned(bytes));
    for family in [egui::FontFamily::Proportional, egui::FontFamily::Monospace] {
        fonts
            .families
            .entry(family)
            .or_default()
            .push(font_name.clone());
    }
    ctx.set_fonts(fonts);
}

/// ₹ 기호와 한글을 표시할 수 있는 폰트를 찾아 등록한다.
/// 1) assets/fonts/ 아래 폰트
/// 2) 시스템 폰트(Windows/Linux/macOS 순)
/// 모두 실패하면 Err를 돌려주고 기본 폰트를 유지한다.
fn setup_fonts(ctx: &egui::Context) -> Result<(), String> {
    let mut candidates: Vec<std::path::PathBuf> = vec![
        "assets/fonts/NotoSansKR-Regular.ttf".into(),
        "assets/fonts/malgun.ttf".into(),
    ];
    if let Some(windir) = env::var_os("WINDIR") {
        let fonts = Path::new(&windir).join("Fonts");
        for cand in ["malgun.ttf", "Nirmala.ttf", "segoeui.ttf"] {
            candidates.push(fonts.join(cand));
        }
    }
    candidates.extend(
        [
            "/usr/share/fonts/opentype/noto/NotoSansCJK-Regular.ttc",
            "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
            "/System/Library/Fonts/AppleSDGothicNeo.ttc",
        ]
        .map(std::path::PathBuf::from),
    );

    for path in candidates {
        if path.exists() {
            let bytes = fs::read(&path)
                .map_err(|e| format!("Failed to read font ({}): {e}", path.display()))?;
            apply_font_bytes(ctx, bytes, "fallback_font");
            tracing::debug!(path = %path.display(), "fallback font registered");
            return Ok(());
        }
    }
    Err("Fallback font not found; ₹ and Hangul may not render.".into())
}

/// 슬라이더 아래에 현재 위치까지 채운 막대를 그린다.
fn slider_fill_strip(ui: &mut egui::Ui, width: f32, percent: f64) {
    let (rect, _) = ui.allocate_exact_size(egui::vec2(width, 4.0), egui::Sense::hover());
    let painter = ui.painter();
    painter.rect_filled(rect, 2.0, COLOR_GRAY_LIGHT);
    let ratio = (percent / 100.0).clamp(0.0, 1.0) as f32;
    if ratio > 0.0 {
        let mut filled = rect;
        filled.set_width(rect.width() * ratio);
        painter.rect_filled(filled, 2.0, COLOR_PRIMARY);
    }
}

/// 원금/이자 구성 도넛 차트.
fn breakdown_chart(ui: &mut egui::Ui, breakdown: &Breakdown, center_label: &str) {
    let size = 200.0;
    let (rect, _) = ui.allocate_exact_size(egui::vec2(size, size), egui::Sense::hover());
    let painter = ui.painter_at(rect);
    let center = rect.center();
    let radius = size * 0.4;
    let thickness = size * 0.12;

    painter.circle_stroke(center, radius, egui::Stroke::new(thickness, COLOR_GRAY_LIGHT));

    let share = (breakdown.interest_percent / 100.0).clamp(0.0, 1.0) as f32;
    if share > 0.0 {
        let segments = ((64.0 * share).ceil() as usize).max(2);
        let points: Vec<egui::Pos2> = (0..=segments)
            .map(|k| {
                let angle = -FRAC_PI_2 + TAU * share * k as f32 / segments as f32;
                center + egui::vec2(angle.cos(), angle.sin()) * radius
            })
            .collect();
        painter.add(egui::Shape::line(
            points,
            egui::Stroke::new(thickness, COLOR_PRIMARY),
        ));
    }

    let text_color = ui.visuals().text_color();
    painter.text(
        center - egui::vec2(0.0, 9.0),
        egui::Align2::CENTER_CENTER,
        center_label,
        egui::FontId::proportional(12.0),
        text_color,
    );
    painter.text(
        center + egui::vec2(0.0, 9.0),
        egui::Align2::CENTER_CENTER,
        format_as_currency_display(breakdown.total_payable, 0),
        egui::FontId::proportional(14.0),
        text_color,
    );
}

fn legend_row(ui: &mut egui::Ui, color: egui::Color32, label: &str, amount: f64) {
    ui.horizontal(|ui| {
        let (rect, _) = ui.allocate_exact_size(egui::vec2(12.0, 12.0), egui::Sense::hover());
        ui.painter().rect_filled(rect, 2.0, color);
        ui.label(label);
        ui.strong(format_as_currency_display(amount, 0));
    });
}

struct GuiApp {
    config: config::Config,
    tr: i18n::Translator,
    lang_input: String,
    lang_status: Option<String>,
    window_alpha: f32,
    show_formula_modal: bool,
    show_settings_modal: bool,
    show_help_modal: bool,
    form: LoanForm,
    /// 항목별 텍스트 상자 내용(LoanField::index 순)
    texts: [String; 3],
    /// 항목별 슬라이더 값
    sliders: [f64; 3],
    /// 항목별 텍스트 입력 디바운서
    debouncers: [Debouncer<String>; 3],
    evaluation: Evaluation,
}

impl GuiApp {
    fn new(config: config::Config) -> Self {
        let lang_code = i18n::resolve_language("auto", Some(config.language.as_str()));
        let tr = i18n::Translator::new_with_pack(&lang_code, config.language_pack_dir.as_deref());
        tracing::info!(
            lang = %lang_code,
            overrides_loaded = tr.lookup("gui.nav.app_title").is_some(),
            "GUI language resolved"
        );
        let form = LoanForm::defaults(&config.ranges);
        let debounce_ms = config.debounce_ms;
        let mut s = Self {
            lang_input: config.language.clone(),
            lang_status: None,
            window_alpha: config.window_alpha.clamp(0.3, 1.0),
            tr,
            show_formula_modal: false,
            show_settings_modal: false,
            show_help_modal: false,
            form,
            texts: Default::default(),
            sliders: [0.0; 3],
            debouncers: std::array::from_fn(|_| Debouncer::from_millis(debounce_ms)),
            evaluation: form.evaluate(),
            config,
        };
        for field in LoanField::ALL {
            s.sync_field_widgets(field);
        }
        s
    }

    /// 정규화된 값으로 텍스트 상자와 슬라이더를 맞춘다.
    fn sync_field_widgets(&mut self, field: LoanField) {
        let value = self.form.get(field);
        self.texts[field.index()] = normalize::display_field_value(field, &value);
        self.sliders[field.index()] = value.value();
    }

    fn recompute(&mut self) {
        self.evaluation = self.form.evaluate();
    }

    /// 슬라이더 이동. 대기 중인 텍스트 입력은 버린다.
    fn apply_slider(&mut self, field: LoanField, value: f64) {
        self.debouncers[field.index()].cancel();
        let spec = field.range(&self.config.ranges);
        self.form.set(field, spec.clamp(value, field.rounds_to_step()));
        self.sync_field_widgets(field);
        self.recompute();
    }

    /// 텍스트 상자 편집. 허용되지 않는 문자를 거르고 정규화는 디바운스 후로 미룬다.
    fn on_text_edited(&mut self, field: LoanField, now: Instant) {
        let idx = field.index();
        let filtered = normalize::filter_typed_text(field, &self.texts[idx]);
        if filtered != self.texts[idx] {
            self.texts[idx] = filtered.clone();
        }
        self.debouncers[idx].schedule(filtered, now);
    }

    /// 디바운스가 끝난 텍스트를 정규화해 반영한다.
    fn apply_text(&mut self, field: LoanField, text: &str) {
        let value = normalize::normalize_field_text(field, &self.config.ranges, text);
        self.form.set(field, value);
        self.sync_field_widgets(field);
        self.recompute();
    }

    /// 마감된 디바운스를 처리하고, 남은 예약 중 가장 이른 마감까지의 시간을 돌려준다.
    fn poll_debounce(&mut self, now: Instant) -> Option<Duration> {
        for field in LoanField::ALL {
            if let Some(text) = self.debouncers[field.index()].poll(now) {
                self.apply_text(field, &text);
            }
        }
        self.debouncers
            .iter()
            .filter_map(Debouncer::next_deadline)
            .min()
            .map(|deadline| deadline.saturating_duration_since(now))
    }

    fn reset_defaults(&mut self) {
        for d in &mut self.debouncers {
            d.cancel();
        }
        self.form = LoanForm::defaults(&self.config.ranges);
        for field in LoanField::ALL {
            self.sync_field_widgets(field);
        }
        self.recompute();
    }

    /// 이번 실행 동안만 언어를 바꾼다(설정 파일은 건드리지 않는다).
    fn apply_language(&mut self, code: &str) {
        self.config.language = code.to_string();
        let resolved = i18n::resolve_language(code, None);
        self.tr = i18n::Translator::new_with_pack(&resolved, self.config.language_pack_dir.as_deref());
        self.lang_status = Some(self.tr.text("gui.settings.applied", "Applied."));
    }

    fn ui_field_row(&mut self, ui: &mut egui::Ui, field: LoanField) {
        let tr = self.tr.clone();
        let txt = |key: &str, default: &str| tr.text(key, default);
        let spec = field.range(&self.config.ranges);
        let idx = field.index();

        ui.horizontal(|ui| {
            let (key, default) = match field {
                LoanField::Principal => ("gui.field.principal", "Loan amount"),
                LoanField::Tenure => ("gui.field.tenure", "Tenure (years)"),
                LoanField::Rate => ("gui.field.rate", "Interest rate (% p.a.)"),
            };
            ui.label(txt(key, default));
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let resp = ui.add(
                    egui::TextEdit::singleline(&mut self.texts[idx]).desired_width(140.0),
                );
                if resp.changed() {
                    self.on_text_edited(field, Instant::now());
                }
            });
        });

        let width = ui.available_width();
        ui.spacing_mut().slider_width = width;
        let mut slider_value = self.sliders[idx];
        let slider = egui::Slider::new(&mut slider_value, spec.min..=spec.max)
            .step_by(spec.step)
            .show_value(false);
        if ui.add(slider).changed() {
            self.apply_slider(field, slider_value);
        }
        slider_fill_strip(ui, width, spec.percent_of(self.sliders[idx]));
        ui.horizontal(|ui| {
            ui.small(normalize::display_field_value(field, &spec.clamp(spec.min, false)));
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.small(normalize::display_field_value(field, &spec.clamp(spec.max, false)));
            });
        });
        ui.add_space(12.0);
    }

    fn ui_inputs(&mut self, ui: &mut egui::Ui) {
        egui::Frame::group(ui.style()).show(ui, |ui| {
            ui.set_min_width(360.0);
            ui.vertical(|ui| {
                for field in LoanField::ALL {
                    self.ui_field_row(ui, field);
                }
            });
        });
    }

    fn ui_results(&mut self, ui: &mut egui::Ui) {
        let tr = self.tr.clone();
        let txt = |key: &str, default: &str| tr.text(key, default);
        let eval = self.evaluation;
        egui::Frame::group(ui.style()).show(ui, |ui| {
            ui.vertical_centered(|ui| {
                ui.label(txt("gui.result.emi", "Monthly EMI"));
                ui.heading(
                    egui::RichText::new(format_as_currency_display(eval.result.emi, 0))
                        .size(28.0)
                        .color(COLOR_PRIMARY),
                );
                ui.add_space(8.0);
                breakdown_chart(
                    ui,
                    &eval.breakdown,
                    &txt("gui.result.total_payable", "Total payable"),
                );
            });
            ui.add_space(8.0);
            legend_row(
                ui,
                COLOR_GRAY_LIGHT,
                &txt("gui.result.principal", "Principal amount"),
                eval.breakdown.principal,
            );
            legend_row(
                ui,
                COLOR_PRIMARY,
                &txt("gui.result.total_interest", "Total interest"),
                eval.breakdown.total_interest,
            );
            ui.small(format!(
                "{} {:.2} %",
                txt("gui.result.interest_share", "Interest share:"),
                eval.breakdown.interest_percent
            ));
        });
    }
}

impl App for GuiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        if let Some(wait) = self.poll_debounce(Instant::now()) {
            ctx.request_repaint_after(wait);
        }

        // 투명도 적용 + 라벨 복사 방지 스타일
        let mut style = (*ctx.style()).clone();
        style.interaction.selectable_labels = false;
        style.visuals.window_fill = style.visuals.window_fill.linear_multiply(self.window_alpha);
        style.visuals.panel_fill = style.visuals.panel_fill.linear_multiply(self.window_alpha);
        ctx.set_style(style);

        let tr = self.tr.clone();
        let txt = move |key: &str, default: &str| tr.text(key, default);

        // 상단 바
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading(txt("gui.nav.app_title", "EMI Calculator"));
                ui.separator();
                if ui.button(txt("gui.formula.button", "Formula reference")).clicked() {
                    self.show_formula_modal = true;
                }
                if ui.button(txt("gui.settings.title", "Settings")).clicked() {
                    self.show_settings_modal = true;
                }
                if ui.button(txt("gui.about.title", "Help / About")).clicked() {
                    self.show_help_modal = true;
                }
            });
        });

        // 설정 모달
        let mut lang_to_apply: Option<String> = None;
        let mut reset_requested = false;
        if self.show_settings_modal {
            egui::Window::new(txt("gui.settings.title", "Settings"))
                .collapsible(false)
                .resizable(true)
                .open(&mut self.show_settings_modal)
                .show(ctx, |ui| {
                    ui.label(txt("gui.settings.lang", "Language"));
                    egui::ComboBox::from_id_source("lang_choice")
                        .selected_text(&self.lang_input)
                        .show_ui(ui, |ui| {
                            ui.selectable_value(&mut self.lang_input, "auto".into(), txt("gui.settings.lang_auto", "System"));
                            ui.selectable_value(&mut self.lang_input, "en-in".into(), "English (India)");
                            ui.selectable_value(&mut self.lang_input, "en-us".into(), "English (US)");
                            ui.selectable_value(&mut self.lang_input, "ko-kr".into(), "한국어");
                        });
                    if ui.button(txt("gui.settings.apply", "Apply")).clicked() {
                        lang_to_apply = Some(self.lang_input.clone());
                    }
                    if let Some(msg) = &self.lang_status {
                        ui.label(msg);
                    }
                    ui.separator();
                    ui.label(txt("gui.settings.alpha", "Window transparency"));
                    ui.add(egui::Slider::new(&mut self.window_alpha, 0.3..=1.0).text("alpha"));
                    ui.separator();
                    if ui.button(txt("gui.settings.reset", "Reset inputs to defaults")).clicked() {
                        reset_requested = true;
                    }
                    ui.small(txt(
                        "gui.settings.not_saved",
                        "Settings apply to this session only. Edit config.toml to change defaults.",
                    ));
                });
        }
        if let Some(code) = lang_to_apply {
            self.apply_language(&code);
        }
        if reset_requested {
            self.reset_defaults();
        }

        // 도움말 모달
        if self.show_help_modal {
            egui::Window::new(txt("gui.about.title", "Help / About"))
                .collapsible(false)
                .resizable(true)
                .open(&mut self.show_help_modal)
                .show(ctx, |ui| {
                    ui.heading(txt("gui.about.app", "Offline loan EMI calculator"));
                    ui.separator();
                    ui.label(txt("gui.about.inputs", "- Type a value or drag the slider; typed values are applied 1 s after you stop typing."));
                    ui.label(txt("gui.about.clamp", "- Values outside the range snap to the nearest bound; 0 or empty becomes the minimum."));
                    ui.label(txt("gui.about.rate", "- Interest rate is rounded to 0.1 %."));
                    ui.label(txt("gui.about.grouping", "- Amounts use Indian digit grouping (₹1,00,00,000)."));
                });
        }

        if self.show_formula_modal {
            let inputs = self.evaluation.inputs;
            let months = finance::months_from_tenure(inputs.tenure_years);
            let per_month = finance::interest_per_month(
                inputs.principal,
                inputs.tenure_years,
                inputs.annual_rate_percent,
            );
            egui::Window::new(txt("gui.formula.title", "Formula reference"))
                .collapsible(true)
                .resizable(true)
                .open(&mut self.show_formula_modal)
                .show(ctx, |ui| {
                    ui.style_mut().wrap = Some(true);
                    ui.heading(txt("gui.formula.interest", "Total interest = P × N × R / 100 (simple interest)"));
                    ui.label(txt("gui.formula.interest_alt", "Same value: interest per month × months, interest per month = P × R / 100 × N / (12 N)"));
                    ui.separator();
                    ui.heading(txt("gui.formula.emi", "EMI = (P + total interest) / (12 N); EMI = 0 when N = 0"));
                    ui.separator();
                    ui.label(format!(
                        "{}: {} × {} = {}",
                        txt("gui.formula.check", "Check"),
                        format_as_currency_display(per_month, 2),
                        months,
                        format_as_currency_display(per_month * months, 0)
                    ));
                });
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .auto_shrink([false; 2])
                .show(ui, |ui| {
                    ui.columns(2, |cols| {
                        self.ui_inputs(&mut cols[0]);
                        self.ui_results(&mut cols[1]);
                    });
                });
        });
    }
}
