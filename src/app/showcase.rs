use crate::config::toml_config::ShowcaseConfig;
use crate::config::Section;
use crate::domain::{Event, Speaker, Venue};
use crate::utils::error::{GuardResult, Result};
use chrono::{Duration, Local};
use std::io::Write;
use std::sync::Arc;

/// Console walkthrough of the entity API.
///
/// Guard failures are caught and printed; only write errors abort a run.
pub struct Showcase<'a> {
    config: &'a ShowcaseConfig,
    failures_reported: usize,
}

impl<'a> Showcase<'a> {
    pub fn new(config: &'a ShowcaseConfig) -> Self {
        Self {
            config,
            failures_reported: 0,
        }
    }

    /// Number of guard failures caught and printed so far.
    pub fn failures_reported(&self) -> usize {
        self.failures_reported
    }

    pub fn run<W: Write>(&mut self, out: &mut W) -> Result<()> {
        writeln!(out, "=== Sistema de Gerenciamento de Eventos ===")?;
        writeln!(out)?;

        for section in self.config.sections() {
            tracing::info!(%section, "running showcase section");
            match section {
                Section::Speakers => self.speakers(out)?,
                Section::Venues => self.venues(out)?,
                Section::Events => self.events(out)?,
            }
            writeln!(out)?;
        }

        tracing::info!(
            failures = self.failures_reported,
            "showcase finished"
        );
        Ok(())
    }

    /// Prints the outcome of an operation that is expected to be rejected.
    fn expect_failure<W: Write, T>(
        &mut self,
        out: &mut W,
        label: &str,
        outcome: GuardResult<T>,
    ) -> Result<()> {
        match outcome {
            Err(e) => {
                self.failures_reported += 1;
                writeln!(out, "   ❌ {}: {}", label, e)?;
            }
            Ok(_) => writeln!(out, "   ⚠️  {}: aceito inesperadamente", label)?,
        }
        Ok(())
    }

    fn speakers<W: Write>(&mut self, out: &mut W) -> Result<()> {
        writeln!(out, "🎤 REGIÃO 1: EXEMPLOS DE PALESTRANTES")?;
        writeln!(out, "======================================")?;

        let mut joao = Speaker::new(1, "João Silva", "joao.silva@email.com")?;
        joao.set_biography("Especialista em Rust com 10 anos de experiência");
        joao.set_company("Microsoft");
        joao.set_linkedin_profile("https://linkedin.com/in/joaosilva");

        let mut maria = Speaker::new(2, "Maria Santos", "maria.santos@tech.com")?;
        maria.set_biography("Arquiteta de Software e consultora em DevOps");

        writeln!(out, "✅ Palestrantes criados com sucesso:")?;
        writeln!(out, "   - {}", joao)?;
        writeln!(out, "   - {}", maria)?;
        writeln!(out)?;

        writeln!(out, "📊 Campos opcionais exibidos como texto vazio:")?;
        writeln!(out, "   Empresa do João: '{}'", joao.company())?;
        writeln!(out, "   LinkedIn do João: '{}'", joao.linkedin_profile())?;
        writeln!(out, "   Empresa da Maria: '{}'", maria.company())?;
        writeln!(out, "   LinkedIn da Maria: '{}'", maria.linkedin_profile())?;
        writeln!(out)?;

        writeln!(out, "📝 Testando set_biography:")?;
        joao.set_biography("   Nova biografia com espaços   ");
        writeln!(out, "   Biografia com trim: '{}'", display_opt(joao.biography()))?;
        joao.set_biography(None);
        writeln!(out, "   Biografia com None: '{}'", display_opt(joao.biography()))?;
        joao.set_biography("   ");
        writeln!(out, "   Biografia com espaços: '{}'", display_opt(joao.biography()))?;
        writeln!(out)?;

        writeln!(out, "❌ Tentativas de criação inválidas:")?;
        self.expect_failure(
            out,
            "SpeakerId zero",
            Speaker::new(0, "Nome Válido", "email@valido.com"),
        )?;
        self.expect_failure(
            out,
            "Nome vazio",
            Speaker::new(1, "   ", "email@valido.com"),
        )?;
        self.expect_failure(
            out,
            "Email inválido",
            Speaker::new(1, "Nome Válido", "email-invalido"),
        )?;
        Ok(())
    }

    fn venues<W: Write>(&mut self, out: &mut W) -> Result<()> {
        writeln!(out, "🏛️  REGIÃO 2: EXEMPLOS DE LOCAIS")?;
        writeln!(out, "================================")?;

        let mut convention = Venue::new(1, "Centro de Convenções", "Avenida Principal, 1000", 500)?;
        convention.set_description("   Moderno centro com infraestrutura completa   ");
        convention.set_parking_info("Estacionamento subterrâneo disponível");

        let mut auditorium = Venue::new(2, "Auditório Municipal", "Rua das Flores, 500", 200)?;

        writeln!(out, "✅ Locais criados com sucesso:")?;
        writeln!(out, "   - {}", convention)?;
        writeln!(out, "   - {}", auditorium)?;
        writeln!(out)?;

        writeln!(out, "🌐 Local padrão (virtual):")?;
        writeln!(out, "   - {}", Venue::default_venue())?;
        writeln!(out)?;

        writeln!(out, "📝 Testando set_description:")?;
        convention.set_description("Descrição atualizada do local");
        writeln!(out, "   Descrição válida: '{}'", display_opt(convention.description()))?;
        convention.set_description(None);
        writeln!(out, "   Descrição com None: '{}'", display_opt(convention.description()))?;
        writeln!(out)?;

        writeln!(out, "🅿️  Informações de estacionamento:")?;
        writeln!(out, "   Estacionamento local 1: '{}'", convention.parking_info())?;
        writeln!(out, "   Estacionamento local 2: '{}'", auditorium.parking_info())?;
        auditorium.set_parking_info(None);
        writeln!(
            out,
            "   Estacionamento local 2 após None: '{}'",
            auditorium.parking_info()
        )?;
        writeln!(out)?;

        writeln!(out, "❌ Tentativas de criação inválidas:")?;
        self.expect_failure(
            out,
            "VenueId zero",
            Venue::new(0, "Nome Válido", "Endereço Válido", 100),
        )?;
        self.expect_failure(
            out,
            "Nome vazio",
            Venue::new(1, "   ", "Endereço Válido", 100),
        )?;
        self.expect_failure(
            out,
            "Capacidade zero",
            Venue::new(1, "Nome Válido", "Endereço Válido", 0),
        )?;
        Ok(())
    }

    fn events<W: Write>(&mut self, out: &mut W) -> Result<()> {
        writeln!(out, "📅 REGIÃO 3: EXEMPLOS DE EVENTOS")?;
        writeln!(out, "================================")?;

        let event_date = Local::now() + Duration::days(self.config.event_days_ahead());
        let mut conference = Event::new(
            1,
            "  Conferência de Tecnologia  ",
            event_date,
            self.config.event_duration(),
        )?;
        conference.set_event_code("  TECH2025  ")?;
        conference.set_description("Conferência anual para desenvolvedores");
        conference.set_requirements("Notebook com Rust instalado");

        writeln!(out, "✅ Evento criado com sucesso:")?;
        writeln!(out, "   - {}", conference)?;
        writeln!(out, "   Código (com trim): '{}'", conference.event_code())?;
        writeln!(out, "   Requisitos: '{}'", conference.requirements())?;
        writeln!(out, "   Observações: '{}'", conference.notes())?;
        writeln!(out)?;

        writeln!(out, "🌐 Local antes da atribuição:")?;
        writeln!(out, "   - {}", conference.venue())?;
        writeln!(
            out,
            "   Local padrão: {}",
            if Venue::is_default(conference.venue()) { "sim" } else { "não" }
        )?;
        writeln!(
            out,
            "   Palestrante principal: {}",
            conference
                .main_speaker()
                .map(|s| s.to_string())
                .unwrap_or_else(|| "nenhum".to_string())
        )?;
        writeln!(out)?;

        let mut speaker = Speaker::new(1, "João Silva", "joao.silva@email.com")?;
        speaker.set_company("Microsoft");
        let venue = Venue::new(1, "Centro de Convenções", "Avenida Principal, 1000", 500)?;
        conference.assign_venue(Arc::new(venue))?;
        conference.assign_main_speaker(Arc::new(speaker))?;

        writeln!(out, "🔗 Após atribuir local e palestrante:")?;
        writeln!(out, "   - {}", conference)?;
        if let Some(main_speaker) = conference.main_speaker() {
            writeln!(out, "   Palestrante principal: {}", main_speaker)?;
        }
        writeln!(out)?;

        writeln!(out, "❌ Operações inválidas:")?;
        self.expect_failure(
            out,
            "Data no passado",
            Event::new(
                2,
                "Workshop",
                Local::now() - Duration::days(1),
                Duration::hours(2),
            ),
        )?;
        self.expect_failure(
            out,
            "Duração curta",
            Event::new(2, "Workshop", event_date, Duration::minutes(29)),
        )?;
        self.expect_failure(out, "Código nulo", conference.set_event_code(None))?;
        self.expect_failure(out, "Local nulo", conference.assign_venue(None))?;
        Ok(())
    }
}

fn display_opt(value: Option<&str>) -> &str {
    value.unwrap_or("null")
}
