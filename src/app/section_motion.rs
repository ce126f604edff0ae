use leptos::{ev, html::ElementType, prelude::*};
use leptos_use::{
    use_event_listener, use_raf_fn_with_options, use_resize_observer, use_window,
    UseRafFnCallbackArgs, UseRafFnOptions,
};
use wasm_bindgen::JsCast;

use super::dom_stage::DomStage;
use crate::motion::{
    MotionConfig, MotionError, MotionRuntime, ObserverLease, SectionMotion, SectionSpec,
};

struct Mounted {
    motion: SectionMotion,
    stage: DomStage,
    _lease: ObserverLease,
}

fn now() -> f64 {
    window().performance().map(|p| p.now()).unwrap_or(0.0)
}

fn prefers_reduced_motion() -> bool {
    window()
        .match_media("(prefers-reduced-motion: reduce)")
        .ok()
        .flatten()
        .is_some_and(|q| q.matches())
}

/// Attach the animations built by `spec` to the section behind `root`.
///
/// Registration happens once the element is in the DOM. Scroll, resize and
/// element size changes resample the triggers; an animation frame loop runs
/// only while a reveal is playing. Everything is torn down with the owning
/// component.
pub fn use_section_motion<E>(root: NodeRef<E>, spec: fn() -> Result<SectionSpec, MotionError>)
where
    E: ElementType,
    E::Output: JsCast + Clone + 'static,
{
    let runtime = expect_context::<MotionRuntime>();
    let state = StoredValue::new_local(None::<Mounted>);
    let pause = StoredValue::new_local(None::<Box<dyn Fn()>>);

    let frames = use_raf_fn_with_options(
        move |args: UseRafFnCallbackArgs| {
            let playing = state
                .try_update_value(|s| {
                    s.as_mut()
                        .map(|m| m.motion.tick(&mut m.stage, args.timestamp))
                })
                .flatten()
                .unwrap_or(false);
            if !playing {
                pause.with_value(|p| {
                    if let Some(p) = p {
                        p();
                    }
                });
            }
        },
        UseRafFnOptions::default().immediate(false),
    );
    pause.set_value(Some(Box::new(frames.pause)));
    let resume = frames.resume;

    let resample = {
        let resume = resume.clone();
        move || {
            let playing = state
                .try_update_value(|s| s.as_mut().map(|m| m.motion.sample(&mut m.stage, now())))
                .flatten()
                .unwrap_or(false);
            if playing {
                resume();
            }
        }
    };

    Effect::new(move |_| {
        let Some(el) = root.get() else {
            return;
        };
        if state.with_value(Option::is_some) {
            return;
        }
        let Ok(el) = el.dyn_into::<web_sys::HtmlElement>() else {
            return;
        };
        let spec = match spec() {
            Ok(spec) => spec,
            Err(e) => {
                log::error!("section animations failed to build: {e}");
                return;
            }
        };
        let config = MotionConfig {
            reduced_motion: runtime.config().reduced_motion || prefers_reduced_motion(),
        };
        let mut stage = DomStage::new(el);
        let motion = SectionMotion::mount(&spec, config, &mut stage, now());
        let playing = motion.is_animating();
        state.set_value(Some(Mounted {
            motion,
            stage,
            _lease: runtime.lease(spec.name),
        }));
        if playing {
            resume();
        }
    });

    let _ = use_event_listener(use_window(), ev::scroll, {
        let resample = resample.clone();
        move |_| resample()
    });
    let _ = use_event_listener(use_window(), ev::resize, {
        let resample = resample.clone();
        move |_| resample()
    });
    use_resize_observer(root, move |_, _| resample());

    on_cleanup(move || {
        state.try_update_value(|s| {
            if let Some(mut m) = s.take() {
                m.motion.teardown(&mut m.stage);
            }
        });
    });
}
