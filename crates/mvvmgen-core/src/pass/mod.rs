
use crate::{
    Error,
    decision::NotifyDecision,
    emit::{
        EmitContext,
        command_manager::CommandManagerPlan,
        event_args::EventArgsCachePlan,
        localize::{LocalizeDecision, emit_localized},
        markers::marker_units,
        member::emit_property,
        unit::{SourceUnit, TypeUnit, UnitHeader},
        validation::emit_validation_scaffold,
    },
    predicate::{MarkerKind, is_eligible},
};
use indexmap::IndexMap;
use mvvmgen_host::prelude::*;
use tracing::{debug, error, warn};
use xxhash_rust::xxh3::Xxh3;

pub const DEFAULT_TOOL_NAME: &str = "Minimal.Mvvm.SourceGenerator";
pub const DEFAULT_OBSERVABLE_BASE: &str = "Minimal.Mvvm.BindableBase";

///
/// Options
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Options {
    /// Stamped into every unit header.
    pub tool_name: String,
    pub tool_version: String,

    /// Types must inherit this to get observable properties.
    pub observable_base: TypeId,

    /// Route notifications through shared `PropertyChangedEventArgs`.
    pub event_args_cache: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            tool_name: DEFAULT_TOOL_NAME.to_string(),
            tool_version: env!("CARGO_PKG_VERSION").to_string(),
            observable_base: TypeId::new(DEFAULT_OBSERVABLE_BASE),
            event_args_cache: true,
        }
    }
}

///
/// Generator
///
/// Stateless between runs; every `run` builds a fresh `GenerationPass`, so
/// one generator can serve concurrent passes.
///

#[derive(Clone, Debug, Default)]
pub struct Generator {
    options: Options,
}

impl Generator {
    #[must_use]
    pub const fn new(options: Options) -> Self {
        Self { options }
    }

    #[must_use]
    pub const fn options(&self) -> &Options {
        &self.options
    }

    /// Run one pass. Candidates are taken in the order given; the host's
    /// cancellation flag is polled once per candidate. Rejected members and
    /// unreadable resources are logged and skipped, so the only error
    /// returned is `Error::Cancelled`.
    pub fn run<H, C>(
        &self,
        host: &H,
        candidates: &[Candidate],
        cancellation: &C,
    ) -> Result<GeneratorOutput, Error>
    where
        H: Host + ?Sized,
        C: Cancellation + ?Sized,
    {
        GenerationPass::new(&self.options, host).run(candidates, cancellation)
    }
}

// Discovered candidates per enclosing type, in first-discovery order.
type Groups<'c> = IndexMap<TypeId, Vec<(MarkerKind, &'c Candidate)>>;

///
/// GenerationPass
///
/// Owns the pass-scoped planners; consumed by `run`.
///

#[derive(Debug)]
pub struct GenerationPass<'a, H: ?Sized> {
    options: &'a Options,
    host: &'a H,
    event_args: EventArgsCachePlan,
    command_manager: CommandManagerPlan,
}

impl<'a, H> GenerationPass<'a, H>
where
    H: Host + ?Sized,
{
    #[must_use]
    pub fn new(options: &'a Options, host: &'a H) -> Self {
        Self {
            options,
            host,
            event_args: EventArgsCachePlan::new(options.event_args_cache),
            command_manager: CommandManagerPlan::default(),
        }
    }

    pub fn run<C>(mut self, candidates: &[Candidate], cancellation: &C) -> Result<GeneratorOutput, Error>
    where
        C: Cancellation + ?Sized,
    {
        let groups = self.discover(candidates, cancellation)?;
        let header = self.header();

        let mut units = marker_units();

        for (owner, members) in &groups {
            if let Some(unit) = self.emit_type(owner, members) {
                units.push(unit);
            }
        }

        units.extend(self.event_args.emit(&header));
        units.extend(self.command_manager.emit(&header));

        let output = GeneratorOutput::new(units);
        debug!(
            types = groups.len(),
            units = output.units().len(),
            fingerprint = output.fingerprint(),
            "generation pass finished"
        );

        Ok(output)
    }

    // header
    fn header(&self) -> UnitHeader<'a> {
        let options = self.options;

        UnitHeader {
            tool_name: &options.tool_name,
            tool_version: &options.tool_version,
            nullable: self.host.nullable_context(),
        }
    }

    // discover
    // filters and groups; excluded candidates are only traced
    fn discover<'c, C>(&self, candidates: &'c [Candidate], cancellation: &C) -> Result<Groups<'c>, Error>
    where
        C: Cancellation + ?Sized,
    {
        let mut groups = Groups::new();

        for candidate in candidates {
            if cancellation.is_cancelled() {
                return Err(Error::Cancelled);
            }

            let Some(kind) = MarkerKind::from_marker(&candidate.marker) else {
                debug!(marker = %candidate.marker, "unrecognized marker, candidate skipped");
                continue;
            };

            if !is_eligible(self.host, kind, candidate, &self.options.observable_base) {
                debug!(
                    member = candidate.member_name(),
                    ty = %candidate.containing_type,
                    %kind,
                    "candidate not eligible"
                );
                continue;
            }

            groups
                .entry(candidate.containing_type.clone())
                .or_default()
                .push((kind, candidate));
        }

        Ok(groups)
    }

    // emit_type
    // one unit per type; members grouped by marker kind in first-appearance order
    fn emit_type(&mut self, owner: &TypeId, members: &[(MarkerKind, &Candidate)]) -> Option<SourceUnit> {
        let host = self.host;
        let Some(ty) = host.type_symbol(owner) else {
            warn!(ty = %owner, "enclosing type unknown to the host, skipped");
            return None;
        };

        let mut by_kind = IndexMap::<MarkerKind, Vec<&Candidate>>::new();
        for (kind, candidate) in members {
            by_kind.entry(*kind).or_default().push(*candidate);
        }

        let header = self.header();
        let mut unit = TypeUnit::begin(&header, ty);
        let mut ctx = EmitContext {
            nullable: header.nullable,
            event_args: &mut self.event_args,
            command_manager: &mut self.command_manager,
        };

        for (kind, candidates) in by_kind {
            match kind {
                MarkerKind::Notify => {
                    for candidate in candidates {
                        match notify_decision(host, ty, candidate) {
                            Some(Ok(decision)) => emit_property(&mut unit, &decision, &mut ctx),
                            Some(Err(err)) => warn!(
                                member = candidate.member_name(),
                                ty = %owner,
                                error = %err,
                                "property not generated"
                            ),
                            None => {}
                        }
                    }
                }

                // a partial type may surface its type-level marker more than once
                MarkerKind::Localize => {
                    if let Some(candidate) = candidates.first() {
                        match LocalizeDecision::load(host, candidate.attributes()) {
                            Ok(decision) => {
                                emit_localized(&mut unit, &decision);
                            }
                            Err(err) => error!(ty = %owner, error = %err, "localization skipped"),
                        }
                    }
                }

                MarkerKind::NotifyDataErrorInfo => {
                    emit_validation_scaffold(&mut unit, ctx.marker());
                }
            }
        }

        let hint = unit.hint_name().to_string();
        let unit = unit.finish();
        if unit.is_none() {
            debug!(ty = %owner, %hint, "no members written, unit dropped");
        }

        unit
    }
}

// notify_decision
fn notify_decision<H>(
    host: &H,
    owner: &TypeSymbol,
    candidate: &Candidate,
) -> Option<Result<NotifyDecision, crate::decision::DecisionError>>
where
    H: Host + ?Sized,
{
    match &candidate.member {
        CandidateMember::Field(field) => Some(NotifyDecision::for_field(host, Some(owner), field)),
        CandidateMember::Method(method) => {
            Some(NotifyDecision::for_method(host, Some(owner), method))
        }
        CandidateMember::Type(_) => None,
    }
}

///
/// GeneratorOutput
///
/// Units in emission order: marker declarations, type units in
/// first-discovery order, then the shared units. The fingerprint is an
/// xxh3 digest over every hint name and text, for host-side caching.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct GeneratorOutput {
    units: Vec<SourceUnit>,
    fingerprint: u64,
}

impl GeneratorOutput {
    #[must_use]
    pub fn new(units: Vec<SourceUnit>) -> Self {
        let mut hasher = Xxh3::new();
        for unit in &units {
            hasher.update(unit.hint_name.as_bytes());
            hasher.update(&[0]);
            hasher.update(unit.text.as_bytes());
            hasher.update(&[0]);
        }

        Self {
            fingerprint: hasher.digest(),
            units,
        }
    }

    #[must_use]
    pub fn units(&self) -> &[SourceUnit] {
        &self.units
    }

    #[must_use]
    pub fn unit(&self, hint_name: &str) -> Option<&SourceUnit> {
        self.units.iter().find(|unit| unit.hint_name == hint_name)
    }

    #[must_use]
    pub const fn fingerprint(&self) -> u64 {
        self.fingerprint
    }

    #[must_use]
    pub fn into_units(self) -> Vec<SourceUnit> {
        self.units
    }
}
